use std::future::Future;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Run `fut` behind a spinner with `message`, clearing it when done.
///
/// indicatif hides the spinner when stderr is not a terminal, so piped
/// output stays clean.
pub async fn with_spinner<F, T>(message: &str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("spinner template is a valid static string"),
    );
    spinner.set_message(style(message).dim().to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = fut.await;
    spinner.finish_and_clear();
    result
}
