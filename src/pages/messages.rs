//! Messages Page
//!
//! Customer conversations: thread list on the left, selected thread on the
//! right, plain request/response send (no live channel).

use leptos::*;

use crate::api::{self, ApiError};
use crate::format;
use crate::models::{ChatMessage, Conversation};
use crate::state::global::GlobalState;

/// Chat page
#[component]
pub fn Messages() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (conversations, set_conversations) = create_signal(Vec::<Conversation>::new());
    let (selected, set_selected) = create_signal(None::<u64>);
    let (messages, set_messages) = create_signal(Vec::<ChatMessage>::new());
    let (loading, set_loading) = create_signal(true);
    let (draft, set_draft) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::chat::fetch_conversations().await {
                Ok(list) => set_conversations.set(list),
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    });

    // Load the selected thread's messages
    let state_for_select = state.clone();
    create_effect(move |_| {
        let Some(conversation_id) = selected.get() else {
            return;
        };
        let state = state_for_select.clone();
        spawn_local(async move {
            match api::chat::fetch_messages(conversation_id).await {
                Ok(list) => set_messages.set(list),
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    });

    let state_for_send = state.clone();
    let on_send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(conversation_id) = selected.get() else {
            return;
        };
        let body = draft.get();
        if body.trim().is_empty() {
            return;
        }

        set_sending.set(true);
        let state = state_for_send.clone();
        spawn_local(async move {
            match api::chat::send_message(conversation_id, &body).await {
                Ok(message) => {
                    set_messages.update(|list| list.push(message));
                    set_draft.set(String::new());
                }
                Err(ApiError::DebtBlocked) => state.debt_blocked.set(true),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Messages"</h1>
                <p class="text-gray-400 mt-1">"Answer customer questions"</p>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                // Thread list
                <div class="bg-gray-800 rounded-xl p-4 space-y-2">
                    {move || {
                        if loading.get() {
                            view! {
                                <div class="py-8 flex justify-center">
                                    <div class="loading-spinner w-6 h-6" />
                                </div>
                            }.into_view()
                        } else {
                            let list = conversations.get();
                            if list.is_empty() {
                                view! {
                                    <p class="text-gray-400 text-sm text-center py-8">"No conversations yet."</p>
                                }.into_view()
                            } else {
                                list.into_iter().map(|conversation| {
                                    let id = conversation.id;
                                    view! {
                                        <button
                                            on:click=move |_| set_selected.set(Some(id))
                                            class=move || {
                                                let base = "w-full text-left px-3 py-2 rounded-lg transition-colors";
                                                if selected.get() == Some(id) {
                                                    format!("{} bg-gray-700", base)
                                                } else {
                                                    format!("{} hover:bg-gray-700/50", base)
                                                }
                                            }
                                        >
                                            <div class="flex items-center justify-between">
                                                <span class="font-medium">{conversation.customer_name.clone()}</span>
                                                {(conversation.unread_count > 0).then(|| view! {
                                                    <span class="bg-primary-600 text-xs px-2 py-0.5 rounded-full">
                                                        {conversation.unread_count}
                                                    </span>
                                                })}
                                            </div>
                                            <div class="text-gray-500 text-sm truncate">
                                                {conversation.last_message.clone().unwrap_or_default()}
                                            </div>
                                        </button>
                                    }
                                }).collect_view()
                            }
                        }
                    }}
                </div>

                // Selected thread
                <div class="md:col-span-2 bg-gray-800 rounded-xl p-4 flex flex-col min-h-[24rem]">
                    {move || {
                        if selected.get().is_none() {
                            view! {
                                <div class="flex-1 flex items-center justify-center text-gray-500">
                                    "Select a conversation"
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="flex-1 space-y-3 overflow-y-auto mb-4">
                                    {messages.get().into_iter().map(|message| {
                                        let mine = message.is_mine();
                                        view! {
                                            <div class=if mine { "flex justify-end" } else { "flex justify-start" }>
                                                <div class=if mine {
                                                    "bg-primary-600 rounded-lg px-3 py-2 max-w-[75%]"
                                                } else {
                                                    "bg-gray-700 rounded-lg px-3 py-2 max-w-[75%]"
                                                }>
                                                    <p class="text-sm">{message.body.clone()}</p>
                                                    <p class="text-xs text-gray-300/60 mt-1">
                                                        {message.sent_at.as_deref().map(format::date_time).unwrap_or_default()}
                                                    </p>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }}

                    // Composer
                    {move || selected.get().map(|_| {
                        let on_send = on_send.clone();
                        view! {
                            <form on:submit=on_send class="flex space-x-2">
                                <input
                                    type="text"
                                    placeholder="Type a reply..."
                                    prop:value=move || draft.get()
                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                                <button
                                    type="submit"
                                    disabled=move || sending.get()
                                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                           rounded-lg font-medium transition-colors"
                                >
                                    {move || if sending.get() { "..." } else { "Send" }}
                                </button>
                            </form>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
