//! 通用展示组件

mod card_template;
mod color_radio;
mod notification_input;
mod section_select_box;
mod snackbar;

pub use card_template::CardTemplate;
pub use color_radio::ColorRadioGroup;
pub use notification_input::NotificationInput;
pub use section_select_box::SectionSelectBox;
pub use snackbar::Snackbar;
