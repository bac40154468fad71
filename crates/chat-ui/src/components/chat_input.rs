use crate::styles::{INPUT_BASE, SEND_BUTTON, combine_styles};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub on_send: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[hook]
fn use_auto_resize_textarea() -> (NodeRef, Callback<()>) {
    let text_area_ref = use_node_ref();

    let resize_textarea = {
        let text_area_ref = text_area_ref.clone();
        Callback::from(move |_| {
            if let Some(text_area) = text_area_ref.cast::<HtmlTextAreaElement>() {
                if let Some(element) = text_area.dyn_ref::<HtmlElement>() {
                    let _ = element.style().set_property("height", "auto");
                    let _ = element.style().set_property("overflow-y", "hidden");
                    let scroll_height = text_area.scroll_height();
                    let new_height = scroll_height.min(200);
                    let _ = element
                        .style()
                        .set_property("height", &format!("{new_height}px"));
                    if new_height >= 200 {
                        let _ = element.style().set_property("overflow-y", "auto");
                    }
                }
            }
        })
    };

    (text_area_ref, resize_textarea)
}

fn clear_input_and_reset(input_value: &UseStateHandle<String>, text_area_ref: &NodeRef) {
    input_value.set(String::new());
    if let Some(text_area) = text_area_ref.cast::<HtmlTextAreaElement>() {
        text_area.set_value("");
        if let Some(element) = text_area.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property("height", "auto");
        }
    }
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let input_value = use_state(String::new);
    let (text_area_ref, resize_textarea) = use_auto_resize_textarea();

    let handle_input = {
        let input_value = input_value.clone();
        let text_area_ref = text_area_ref.clone();
        let resize_textarea = resize_textarea.clone();
        Callback::from(move |_| {
            if let Some(text_area) = text_area_ref.cast::<HtmlTextAreaElement>() {
                input_value.set(text_area.value());
                resize_textarea.emit(());
            }
        })
    };

    let send_message = {
        let input_value = input_value.clone();
        let on_send = props.on_send.clone();
        let text_area_ref = text_area_ref.clone();
        Callback::from(move |_| {
            let text = (*input_value).clone();
            if !text.trim().is_empty() {
                on_send.emit(text);
                clear_input_and_reset(&input_value, &text_area_ref);
            }
        })
    };

    let handle_keydown = {
        let send_message = send_message.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send_message.emit(());
            }
        })
    };

    let handle_click = {
        let send_message = send_message.clone();
        Callback::from(move |_: MouseEvent| send_message.emit(()))
    };

    let is_empty = input_value.trim().is_empty();
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| "Type a message...".to_string());

    html! {
        <div class="flex items-end gap-3 p-4 border-t border-gray-200">
            <div class="flex-1 relative">
                <textarea
                    ref={text_area_ref}
                    class={combine_styles(&[INPUT_BASE, "min-h-[40px] max-h-[200px]"])}
                    placeholder={placeholder}
                    value={(*input_value).clone()}
                    oninput={handle_input}
                    onkeydown={handle_keydown}
                    disabled={props.disabled}
                    rows="1"
                />
            </div>
            <button
                class={SEND_BUTTON}
                onclick={handle_click}
                disabled={is_empty || props.disabled}
                title="Send message"
                aria-label="Send message"
            >
                <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M22 2L11 13" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                    <path d="M22 2L15 22L11 13L2 9L22 2Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                </svg>
            </button>
        </div>
    }
}
