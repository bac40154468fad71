//! Centralized style constants for the chat components

pub const CONTAINER_BG: &str = "bg-white";
pub const MUTED_TEXT: &str = "text-gray-500";
pub const PRIMARY_BORDER: &str = "border-gray-200";

// Message bubbles
pub const USER_BUBBLE_COLORS: &str = "bg-blue-500 text-white";
pub const ASSISTANT_BUBBLE_COLORS: &str = "bg-gray-100 text-gray-900";
pub const USER_TIME_TEXT: &str = "text-blue-100";

// Input area
pub const INPUT_BASE: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg text-sm leading-relaxed resize-none outline-none overflow-hidden focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 disabled:bg-gray-100 disabled:cursor-not-allowed";
pub const SEND_BUTTON: &str = "flex items-center justify-center w-[42px] h-[42px] p-0 rounded-lg bg-indigo-600 text-white cursor-pointer transition-colors flex-shrink-0 hover:bg-indigo-700 disabled:bg-gray-200 disabled:cursor-not-allowed disabled:text-gray-400";

// Layout
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_COL_GAP_4: &str = "flex flex-col gap-4";
pub const STANDARD_PADDING: &str = "p-4";

/// Utility function to combine multiple style constants
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_joins_with_single_spaces() {
        assert_eq!(combine_styles(&["a", "b c", "d"]), "a b c d");
    }
}
