#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tokcount::error::InputError;
    use tokcount::utils::logging::level_from;
    use tokcount::utils::{read_input, resolve_source, validate, Input, InputSource};

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_resolve_source() {
        assert_eq!(
            resolve_source(&args(&["-f", "notes.md"])),
            InputSource::File(PathBuf::from("notes.md"))
        );
        // Anything after the path is ignored
        assert_eq!(
            resolve_source(&args(&["-f", "notes.md", "extra"])),
            InputSource::File(PathBuf::from("notes.md"))
        );
        assert_eq!(
            resolve_source(&args(&["hello", "big", "world"])),
            InputSource::Args("hello big world".to_string())
        );
        // A lone flag is just text
        assert_eq!(
            resolve_source(&args(&["-f"])),
            InputSource::Args("-f".to_string())
        );
        // The flag only counts in first position
        assert_eq!(
            resolve_source(&args(&["x", "-f", "notes.md"])),
            InputSource::Args("x -f notes.md".to_string())
        );
        assert_eq!(resolve_source(&[]), InputSource::Stdin);
    }

    #[test]
    fn test_read_file_wins_over_stdin() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "conteúdo do arquivo").unwrap();

        let source = InputSource::File(path.clone());
        let input = read_input(source, &b"vindo do stdin"[..]).unwrap();

        assert_eq!(input.text, "conteúdo do arquivo");
        assert_eq!(
            input.source_label,
            Some(path.to_string_lossy().to_string())
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_input(InputSource::File(path), &b""[..]).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_invalid_utf8_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let err = read_input(InputSource::File(path), &b""[..]).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn test_read_stdin() {
        let input = read_input(InputSource::Stdin, &b"texto via pipe\n"[..]).unwrap();
        assert_eq!(input.text, "texto via pipe\n");
        assert_eq!(input.source_label, None);
    }

    #[test]
    fn test_empty_input_from_every_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, " \n\t \n").unwrap();

        assert!(matches!(
            read_input(InputSource::File(path), &b""[..]),
            Err(InputError::EmptyInput)
        ));
        assert!(matches!(
            read_input(InputSource::Args("   ".to_string()), &b""[..]),
            Err(InputError::EmptyInput)
        ));
        assert!(matches!(
            read_input(InputSource::Stdin, &b"\n\n  "[..]),
            Err(InputError::EmptyInput)
        ));
    }

    #[test]
    fn test_validate_keeps_text_untrimmed() {
        let input = Input {
            text: "  hi  ".to_string(),
            source_label: None,
        };
        assert_eq!(validate(input).unwrap().text, "  hi  ");
    }

    #[test]
    fn test_log_level_from_env_value() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(level_from(Some("off")), LevelFilter::Off);
        assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
    }
}
