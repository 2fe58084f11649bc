// crates/pulse-terminal/src/speech.rs

//! Speech capture.
//!
//! The interpreter only ever sees the final transcript of a listening
//! session. [`SpeechCapture`] is that contract: start, stop, read the
//! transcript, reset it. The terminal ships [`KeyboardDictation`], where
//! the "utterance" is typed while listening.

pub trait SpeechCapture {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_listening(&self) -> bool;

    /// Text recognized since the last reset.
    fn transcript(&self) -> &str;
    fn reset_transcript(&mut self);
}

/// Keystrokes typed while listening become the transcript.
#[derive(Debug, Default)]
pub struct KeyboardDictation {
    listening: bool,
    transcript: String,
}

impl KeyboardDictation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. Ignored unless listening.
    pub fn hear(&mut self, c: char) {
        if self.listening {
            self.transcript.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.listening {
            self.transcript.pop();
        }
    }
}

impl SpeechCapture for KeyboardDictation {
    fn start(&mut self) {
        self.listening = true;
    }

    fn stop(&mut self) {
        self.listening = false;
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn transcript(&self) -> &str {
        &self.transcript
    }

    fn reset_transcript(&mut self) {
        self.transcript.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hears_while_listening() {
        let mut dictation = KeyboardDictation::new();
        dictation.hear('x');
        assert_eq!(dictation.transcript(), "");

        dictation.start();
        assert!(dictation.is_listening());
        "hi".chars().for_each(|c| dictation.hear(c));
        dictation.backspace();
        dictation.stop();
        dictation.hear('!');

        assert_eq!(dictation.transcript(), "h");
        assert!(!dictation.is_listening());

        dictation.reset_transcript();
        assert_eq!(dictation.transcript(), "");
    }
}
