pub mod responses;

use gloo_timers::future::TimeoutFuture;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use self::responses::generate_response;

/// How long the widget pretends to "think" before a canned reply lands.
const REPLY_DELAY_MS: u32 = 1_200;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    User,
    Ai,
    Pending,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ChatMessage {
    pub text: String,
    pub role: Role,
}

/// Rewrites the pending placeholder at `index` into a finished AI reply.
/// A stale or out-of-range index is ignored.
pub fn resolve_reply(messages: &mut [ChatMessage], index: usize, text: &str) {
    if let Some(message) = messages.get_mut(index) {
        if message.role == Role::Pending {
            message.text = text.to_string();
            message.role = Role::Ai;
        }
    }
}

fn random_index(len: usize) -> usize {
    (js_sys::Math::random() * len as f64).floor() as usize
}

pub enum ChatMsg {
    ToggleDrawer,
    SetInput(String),
    Send,
    ReplyReady { index: usize, text: &'static str },
}

/// Floating consultation-assistant widget: a toggle button, a drawer with
/// the message log, and a one-line input. Replies are keyword-matched
/// canned strings delivered after an artificial delay; closing the drawer
/// while a reply is pending does not cancel it.
pub struct ChatWidget {
    open: bool,
    input: String,
    messages: Vec<ChatMessage>,
    panel_ref: NodeRef,
    scroll_pending: bool,
}

impl Component for ChatWidget {
    type Message = ChatMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            input: String::new(),
            messages: Vec::new(),
            panel_ref: NodeRef::default(),
            scroll_pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatMsg::ToggleDrawer => {
                self.open = !self.open;
                true
            }
            ChatMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatMsg::Send => {
                let text = self.input.trim().to_string();
                if text.is_empty() {
                    return false;
                }

                self.messages.push(ChatMessage {
                    text: text.clone(),
                    role: Role::User,
                });
                self.input.clear();

                self.messages.push(ChatMessage {
                    text: "...".to_string(),
                    role: Role::Pending,
                });
                let index = self.messages.len() - 1;

                // Reply is computed up front; the delay is pure theater.
                let reply = generate_response(&text, random_index);
                ctx.link().send_future(async move {
                    TimeoutFuture::new(REPLY_DELAY_MS).await;
                    ChatMsg::ReplyReady { index, text: reply }
                });
                self.scroll_pending = true;
                true
            }
            ChatMsg::ReplyReady { index, text } => {
                resolve_reply(&mut self.messages, index, text);
                self.scroll_pending = true;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Keep the newest message in view whenever the log grows or a
        // pending reply resolves.
        if self.scroll_pending {
            if let Some(panel) = self.panel_ref.cast::<Element>() {
                panel.set_scroll_top(panel.scroll_height());
            }
            self.scroll_pending = false;
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatMsg::ToggleDrawer);
        let send = ctx.link().callback(|_| ChatMsg::Send);
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatMsg::SetInput(input.value())
        });
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(ChatMsg::Send)
        });

        let drawer_style = if self.open {
            "display: flex;"
        } else {
            "display: none;"
        };

        html! {
            <>
                <style>
                    {r#"
                        .chat-toggle {
                            position: fixed;
                            bottom: 1.5rem;
                            right: 1.5rem;
                            width: 56px;
                            height: 56px;
                            border-radius: 50%;
                            border: none;
                            background: #1E90FF;
                            color: #fff;
                            font-size: 1.4rem;
                            cursor: pointer;
                            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                            z-index: 20;
                        }
                        .chat-drawer {
                            position: fixed;
                            bottom: 5.5rem;
                            right: 1.5rem;
                            width: 320px;
                            max-height: 420px;
                            flex-direction: column;
                            background: rgba(26, 26, 26, 0.97);
                            border: 1px solid rgba(30, 144, 255, 0.2);
                            border-radius: 16px;
                            overflow: hidden;
                            z-index: 20;
                        }
                        .chat-header {
                            padding: 0.75rem 1rem;
                            color: #fff;
                            font-weight: bold;
                            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        }
                        .chat-messages {
                            flex: 1;
                            overflow-y: auto;
                            padding: 0.75rem;
                            min-height: 180px;
                        }
                        .msg {
                            margin-bottom: 0.5rem;
                            padding: 0.5rem 0.75rem;
                            border-radius: 12px;
                            font-size: 0.9rem;
                            white-space: pre-line;
                            color: #fff;
                        }
                        .msg.user {
                            background: #1E90FF;
                            margin-left: 2rem;
                        }
                        .msg.ai {
                            background: rgba(255, 255, 255, 0.08);
                            margin-right: 2rem;
                        }
                        .msg.typing {
                            opacity: 0.6;
                        }
                        .chat-input-row {
                            display: flex;
                            border-top: 1px solid rgba(255, 255, 255, 0.1);
                        }
                        .chat-input-row input {
                            flex: 1;
                            padding: 0.75rem;
                            border: none;
                            background: transparent;
                            color: #fff;
                            outline: none;
                        }
                        .chat-input-row button {
                            border: none;
                            background: transparent;
                            color: #1E90FF;
                            padding: 0 1rem;
                            cursor: pointer;
                            font-weight: bold;
                        }
                    "#}
                </style>
                <button class="chat-toggle" aria-label="Chat with us" onclick={toggle}>
                    { if self.open { "✕" } else { "💬" } }
                </button>
                <div class="chat-drawer" style={drawer_style}>
                    <div class="chat-header">{"TechVantage Assistant"}</div>
                    <div class="chat-messages" ref={self.panel_ref.clone()}>
                        { for self.messages.iter().map(render_message) }
                    </div>
                    <div class="chat-input-row">
                        <input
                            type="text"
                            aria-label="Your question"
                            placeholder="Ask about services, pricing..."
                            value={self.input.clone()}
                            {oninput}
                            {onkeydown}
                        />
                        <button aria-label="Send" onclick={send}>{"Send"}</button>
                    </div>
                </div>
            </>
        }
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let role_class = match message.role {
        Role::User => classes!("msg", "user"),
        Role::Ai => classes!("msg", "ai"),
        Role::Pending => classes!("msg", "ai", "typing"),
    };
    html! { <div class={role_class}>{ &message.text }</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_at(messages: &[ChatMessage], index: usize) -> bool {
        messages[index].role == Role::Pending
    }

    #[test]
    fn resolve_rewrites_placeholder_in_place() {
        let mut messages = vec![
            ChatMessage { text: "hi".to_string(), role: Role::User },
            ChatMessage { text: "...".to_string(), role: Role::Pending },
        ];
        resolve_reply(&mut messages, 1, "hello!");

        assert_eq!(messages.len(), 2);
        assert!(!pending_at(&messages, 1));
        assert_eq!(messages[1].role, Role::Ai);
        assert_eq!(messages[1].text, "hello!");
    }

    #[test]
    fn resolve_ignores_non_pending_and_out_of_range() {
        let mut messages = vec![ChatMessage { text: "hi".to_string(), role: Role::User }];

        resolve_reply(&mut messages, 0, "clobber");
        assert_eq!(messages[0].text, "hi");
        assert_eq!(messages[0].role, Role::User);

        resolve_reply(&mut messages, 5, "nothing");
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn interleaved_replies_resolve_independently() {
        let mut messages = vec![
            ChatMessage { text: "first".to_string(), role: Role::User },
            ChatMessage { text: "...".to_string(), role: Role::Pending },
            ChatMessage { text: "second".to_string(), role: Role::User },
            ChatMessage { text: "...".to_string(), role: Role::Pending },
        ];

        // Completion order, not send order.
        resolve_reply(&mut messages, 3, "reply b");
        resolve_reply(&mut messages, 1, "reply a");

        assert_eq!(messages[1].text, "reply a");
        assert_eq!(messages[3].text, "reply b");
        assert!(messages.iter().all(|m| m.role != Role::Pending));
    }
}
