use moodlog_frontend_common::mood::MOOD_OPTIONS;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MoodPickerProps {
    pub selected: u8,
    pub on_select: Callback<u8>,
}

/// The five-button mood scale used when writing an entry.
#[function_component(MoodPicker)]
pub fn mood_picker(props: &MoodPickerProps) -> Html {
    html! {
        <div class="grid grid-cols-5 gap-2">
            {for MOOD_OPTIONS.iter().map(|option| {
                let classes = if props.selected == option.value {
                    "flex flex-col items-center p-3 rounded-lg border-2 transition-all border-blue-500 bg-blue-50 shadow-md"
                } else {
                    "flex flex-col items-center p-3 rounded-lg border-2 transition-all border-gray-200 hover:border-gray-300 hover:bg-gray-50"
                };
                let on_click = {
                    let on_select = props.on_select.clone();
                    let value = option.value;
                    Callback::from(move |_: MouseEvent| on_select.emit(value))
                };
                html! {
                    <button key={option.value} type="button" onclick={on_click} class={classes}>
                        <span class="text-2xl mb-1">{option.emoji}</span>
                        <span class="text-xs text-gray-700 text-center font-medium">{option.label}</span>
                    </button>
                }
            })}
        </div>
    }
}
