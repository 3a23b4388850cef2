use crate::app::journal::ErrorJournal;
use crate::app::species::{Behavior, Handle};
use anyhow::{Context, Result};
use std::fmt;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Выберите животное (monkey, shark, eagle, bear, whale):";
const SEPARATOR: &str = "-----------------------------";

/// Reads one line and trims it. End of input without a newline yields whatever was read.
/// Bytes that are not UTF-8 are replaced, so such input simply matches no species.
pub fn read_species_key<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .read_until(b'\n', &mut buf)
        .context("Failed to read species from stdin")?;
    Ok(String::from_utf8_lossy(&buf).trim().to_string())
}

/// Drives one pass over a handle, printing to `out` and logging failures to `journal`.
pub struct Runner<'a, W: Write> {
    out: W,
    journal: &'a ErrorJournal,
    write_error: Option<io::Error>,
}

impl<'a, W: Write> Runner<'a, W> {
    pub fn new(out: W, journal: &'a ErrorJournal) -> Self {
        Self {
            out,
            journal,
            write_error: None,
        }
    }

    pub fn prompt(&mut self) -> Result<()> {
        writeln!(self.out, "{}", PROMPT)?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints one line. A failed write is kept for the end of the pass instead of cutting it short.
    fn emit(&mut self, line: fmt::Arguments<'_>) {
        let result = self.out.write_fmt(line).and_then(|()| self.out.write_all(b"\n"));
        if let Err(err) = result {
            if self.write_error.is_none() {
                log::warn!("Failed to write to stdout: {}", err);
                self.write_error = Some(err);
            }
        }
    }

    /// Always completes the pass; an output failure is returned only once every behavior ran.
    pub fn run(&mut self, handle: Handle) -> Result<()> {
        self.emit(format_args!("Животное: {}", handle));

        // Each behavior runs regardless of how the previous one went.
        for behavior in Behavior::ALL {
            match behavior.invoke(handle.as_animal()) {
                Ok(result) => self.emit(format_args!("{}: {}", behavior.label(), result)),
                Err(err) => {
                    self.emit(format_args!("Ошибка при вызове {}: {}", behavior.name(), err));
                    if let Err(log_err) = self.journal.record(&err) {
                        log::warn!("{:#}", log_err);
                    }
                }
            }
        }

        if let Some(swimmer) = handle.as_swimmer() {
            self.emit(format_args!("Умеет плавать: {}", swimmer.can_swim()));
        }

        if let Some(action) = handle.signature_action() {
            self.emit(format_args!("{}: {}", action.label, action.description));
        }

        self.emit(format_args!("{}", SEPARATOR));
        let flushed = self.out.flush();

        match self.write_error.take() {
            Some(err) => Err(err).context("Failed to print results"),
            None => flushed.context("Failed to flush stdout"),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::registry::Registry;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct Scenario {
        stdout: String,
        log: Option<String>,
    }

    fn play(input: impl AsRef<[u8]>) -> Scenario {
        let dir = TempDir::new().unwrap();
        play_in(&dir, input)
    }

    fn play_in(dir: &TempDir, input: impl AsRef<[u8]>) -> Scenario {
        let journal = ErrorJournal::new(dir.path().join("errors.log"));
        let key = read_species_key(&mut Cursor::new(input.as_ref())).unwrap();
        let handle = Registry::builtin().lookup(&key);

        let mut runner = Runner::new(Vec::new(), &journal);
        runner.run(handle).unwrap();

        Scenario {
            stdout: String::from_utf8(runner.into_inner()).unwrap(),
            log: fs::read_to_string(journal.path()).ok(),
        }
    }

    #[test]
    fn monkey_prints_its_full_block() {
        let scenario = play("monkey\n");
        assert_eq!(
            scenario.stdout,
            "Животное: Monkey\n\
             Звук: Кричит\n\
             Движение: Прыгает по деревьям\n\
             Еда: Ест бананы\n\
             Сон: Спит в вольере\n\
             Умеет плавать: false\n\
             Лазание: Лазает по деревьям\n\
             -----------------------------\n"
        );
        assert_eq!(scenario.log, None);
    }

    #[test]
    fn unknown_key_prints_and_logs_four_errors() {
        let scenario = play("dog\n");
        assert_eq!(
            scenario.stdout,
            "Животное: UnknownAnimal\n\
             Ошибка при вызове Speak: неизвестное животное не может издавать звуки\n\
             Ошибка при вызове Move: неизвестное животное не может двигаться\n\
             Ошибка при вызове Eat: неизвестное животное не может есть\n\
             Ошибка при вызове Sleep: неизвестное животное не может спать\n\
             -----------------------------\n"
        );
        assert_eq!(
            scenario.log.as_deref(),
            Some(
                "Ошибка: неизвестное животное не может издавать звуки\n\
                 Ошибка: неизвестное животное не может двигаться\n\
                 Ошибка: неизвестное животное не может есть\n\
                 Ошибка: неизвестное животное не может спать\n"
            )
        );
    }

    #[test]
    fn repeated_runs_accumulate_in_the_log() {
        let dir = TempDir::new().unwrap();
        play_in(&dir, "dog\n");
        let second = play_in(&dir, "cat\n");
        assert_eq!(second.log.unwrap().lines().count(), 8);
    }

    #[test]
    fn blank_input_selects_unknown() {
        for input in ["", "\n", "   \t\n"] {
            let scenario = play(input);
            assert!(scenario.stdout.starts_with("Животное: UnknownAnimal\n"), "{input:?}");
            assert!(!scenario.stdout.contains("Умеет плавать"));
            assert_eq!(scenario.log.unwrap().lines().count(), 4);
        }
    }

    #[test]
    fn non_utf8_input_selects_unknown() {
        let scenario = play(b"d\xffog\n");
        assert!(scenario.stdout.starts_with("Животное: UnknownAnimal\n"));
        assert!(scenario.stdout.ends_with("-----------------------------\n"));
        assert_eq!(scenario.log.unwrap().lines().count(), 4);
    }

    #[test]
    fn whale_with_or_without_newline() {
        for input in ["whale", "whale\n", "  whale  \r\n"] {
            let scenario = play(input);
            assert!(scenario.stdout.contains("Умеет плавать: true\n"), "{input:?}");
            assert!(scenario.stdout.contains("Ныряние: Ныряет глубоко\n"));
            assert_eq!(scenario.log, None);
        }
    }

    #[test]
    fn every_known_species_gets_exactly_its_action() {
        let cases = [
            ("monkey", "Лазание: Лазает по деревьям", false),
            ("shark", "Охота: Охотится на рыбу", true),
            ("eagle", "Полет: Летает высоко", false),
            ("bear", "Зимовка: Спит зимой", true),
            ("whale", "Ныряние: Ныряет глубоко", true),
        ];
        let all_labels = ["Лазание:", "Охота:", "Полет:", "Зимовка:", "Ныряние:"];

        for (key, action, swims) in cases {
            let scenario = play(key);
            assert!(scenario.stdout.contains(action), "{key}");
            assert!(scenario.stdout.contains(&format!("Умеет плавать: {}\n", swims)));
            let printed = all_labels
                .iter()
                .filter(|label| scenario.stdout.contains(*label))
                .count();
            assert_eq!(printed, 1, "{key}");
            assert!(!scenario.stdout.contains("Ошибка"));
        }
    }

    #[test]
    fn failed_log_write_does_not_stop_the_run() {
        let dir = TempDir::new().unwrap();
        let journal = ErrorJournal::new(dir.path().join("no-such-dir").join("errors.log"));
        let mut runner = Runner::new(Vec::new(), &journal);
        runner.run(Registry::builtin().lookup("dog")).unwrap();
        let stdout = String::from_utf8(runner.into_inner()).unwrap();
        assert_eq!(stdout.matches("Ошибка при вызове").count(), 4);
        assert!(stdout.ends_with("-----------------------------\n"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_stdout_still_logs_every_error() {
        let dir = TempDir::new().unwrap();
        let journal = ErrorJournal::new(dir.path().join("errors.log"));
        let mut runner = Runner::new(BrokenPipe, &journal);

        let err = runner.run(Registry::builtin().lookup("dog")).unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to print results"));
        let log = fs::read_to_string(journal.path()).unwrap();
        assert_eq!(log.lines().count(), 4);
    }

    #[test]
    fn failed_stdout_is_reported_for_known_species_too() {
        let dir = TempDir::new().unwrap();
        let journal = ErrorJournal::new(dir.path().join("errors.log"));
        let mut runner = Runner::new(BrokenPipe, &journal);

        assert!(runner.run(Registry::builtin().lookup("bear")).is_err());
        assert!(!journal.path().exists());
    }

    #[test]
    fn prompt_is_a_single_line() {
        let dir = TempDir::new().unwrap();
        let journal = ErrorJournal::new(dir.path().join("errors.log"));
        let mut runner = Runner::new(Vec::new(), &journal);
        runner.prompt().unwrap();
        assert_eq!(
            String::from_utf8(runner.into_inner()).unwrap(),
            format!("{}\n", PROMPT)
        );
    }
}
