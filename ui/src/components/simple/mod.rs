mod button;
mod checkbox;

pub use button::{Button, ButtonProps, ButtonVariant};
pub use checkbox::{Checkbox, CheckboxProps};
