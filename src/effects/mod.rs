pub mod border;
pub mod caret;
pub mod marble;
pub mod slider;
pub mod weave;

pub use border::button_border_animation;
pub use caret::custom_cursor;
pub use marble::init_mouse_marble_effect;
pub use slider::{init_image_slider, SliderHandle};
pub use weave::hover_weave_effect;
