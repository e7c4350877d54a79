//! Interactive selection protocol shared by every edit/delete/set-main
//! operation: zero candidates report not-found, a single candidate is taken
//! without prompting, and two or more go through the chooser collaborator.

/// Blocking collaborator that presents enumerated options and returns the
/// chosen index, or `None` when the user cancels.
pub trait Chooser {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Option<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    NotFound,
    Picked(T),
    Cancelled,
}

impl<T> Selection<T> {
    pub fn picked(self) -> Option<T> {
        match self {
            Selection::Picked(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Selection<U> {
        match self {
            Selection::Picked(value) => Selection::Picked(f(value)),
            Selection::NotFound => Selection::NotFound,
            Selection::Cancelled => Selection::Cancelled,
        }
    }
}

pub fn select_index(
    prompt: &str,
    options: &[String],
    chooser: &mut dyn Chooser,
) -> Selection<usize> {
    match options.len() {
        0 => Selection::NotFound,
        1 => Selection::Picked(0),
        _ => match chooser.choose(prompt, options) {
            Some(index) if index < options.len() => Selection::Picked(index),
            _ => Selection::Cancelled,
        },
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Chooser;

    /// Replays a fixed script of answers; panics when prompted unexpectedly.
    pub struct ScriptedChooser {
        answers: Vec<Option<usize>>,
    }

    impl ScriptedChooser {
        pub fn new(answers: Vec<Option<usize>>) -> Self {
            Self { answers }
        }

        pub fn silent() -> Self {
            Self {
                answers: Vec::new(),
            }
        }
    }

    impl Chooser for ScriptedChooser {
        fn choose(&mut self, _prompt: &str, _options: &[String]) -> Option<usize> {
            assert!(!self.answers.is_empty(), "unexpected interactive prompt");
            self.answers.remove(0)
        }
    }
}
