mod mood_picker;

pub use mood_picker::MoodPicker;
