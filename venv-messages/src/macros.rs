/// Render a message template, binding each `key = value` to `{key}`.
///
/// Values only need `Display`, so counts and `Path::display()` go in
/// directly.
///
/// ```rust
/// use std::path::Path;
/// use venv_messages::{msg, MESSAGES};
///
/// let env = Path::new("projects/api/.venv");
/// assert_eq!(msg!(MESSAGES.delete_success, path = env.display()), "Deleted: projects/api/.venv");
/// assert_eq!(msg!(MESSAGES.scan_none_found), "No Python virtual environments found.");
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr) => {
        $crate::builder::MessageBuilder::new($template).build()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        $crate::builder::MessageBuilder::new($template)
            $(.var(stringify!($key), $value))+
            .build()
    };
}
