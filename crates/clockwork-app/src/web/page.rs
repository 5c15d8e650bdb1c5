//! The chat page served at `/`.

pub(super) const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Time Agent</title>
<style>
  body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #222; }
  h1 { margin-bottom: 0.25rem; }
  .hint { color: #666; margin-top: 0; }
  #chat { border: 1px solid #ddd; border-radius: 8px; height: 400px; overflow-y: auto; padding: 0.75rem; background: #fafafa; }
  .msg { margin: 0.4rem 0; padding: 0.5rem 0.75rem; border-radius: 8px; max-width: 80%; white-space: pre-wrap; }
  .user { background: #dbeafe; margin-left: auto; }
  .assistant { background: #fff; border: 1px solid #e5e5e5; }
  .error { color: #b91c1c; }
  form { display: flex; gap: 0.5rem; margin-top: 0.75rem; }
  #message { flex: 1; padding: 0.5rem; font-size: 1rem; }
  button { padding: 0.5rem 1rem; cursor: pointer; }
  .examples button { margin: 0.25rem 0.25rem 0 0; font-size: 0.85rem; }
</style>
</head>
<body>
<h1>Time Agent</h1>
<p class="hint">Ask the agent for the current time! The agent itself doesn't know what time it is &ndash; it must use its tool.</p>
<div id="chat" aria-label="Chat"></div>
<form id="form">
  <input id="message" autocomplete="off" placeholder="e.g., 'What time is it?' or 'How late is it?'">
  <button type="submit">Send</button>
</form>
<button id="clear" type="button">Clear Chat</button>
<div class="examples">
  <p>Examples:</p>
  <button type="button">What time is it?</button>
  <button type="button">Can you tell me the time?</button>
  <button type="button">What's the current time?</button>
  <button type="button">Hello, do you know what time it is right now?</button>
</div>
<script>
  let history = [];
  const chat = document.getElementById('chat');
  const input = document.getElementById('message');

  function render() {
    chat.innerHTML = '';
    for (const m of history) {
      const div = document.createElement('div');
      div.className = 'msg ' + m.role + (m.content.startsWith('Error: ') ? ' error' : '');
      div.textContent = m.content;
      chat.appendChild(div);
    }
    chat.scrollTop = chat.scrollHeight;
  }

  async function post(path, body) {
    const res = await fetch(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body ?? {}),
    });
    return res.json();
  }

  document.getElementById('form').addEventListener('submit', async (e) => {
    e.preventDefault();
    const message = input.value;
    if (!message.trim()) return;
    input.disabled = true;
    try {
      const reply = await post('/api/chat', { message, history });
      history = reply.history;
      input.value = reply.message;
    } catch (err) {
      history.push({ role: 'user', content: message }, { role: 'assistant', content: 'Error: ' + err });
    } finally {
      input.disabled = false;
      input.focus();
      render();
    }
  });

  document.getElementById('clear').addEventListener('click', async () => {
    history = await post('/api/reset');
    render();
  });

  for (const b of document.querySelectorAll('.examples button')) {
    b.addEventListener('click', () => { input.value = b.textContent; input.focus(); });
  }
</script>
</body>
</html>
"##;
