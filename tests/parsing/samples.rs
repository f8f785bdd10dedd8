#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use quizbank::parsing;

    fn text_files(dir: &Path) -> Vec<PathBuf> {
        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let files = text_files(dir);

        assert!(!files.is_empty(), "No .txt files found in samples directory");

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match parsing::parse(&content) {
                Ok(_) => {}
                Err(e) => {
                    println!("File {:?} failed to parse: {:?}", file, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let dir = Path::new("tests/broken/");

        assert!(dir.exists(), "broken directory missing");

        let files = text_files(dir);

        assert!(!files.is_empty(), "No .txt files found in broken directory");

        let mut unexpected_successes = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match parsing::parse(&content) {
                Ok(_) => {
                    println!("File {:?} unexpectedly parsed successfully", file);
                    unexpected_successes.push(file.clone());
                }
                Err(_) => {}
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not to parse successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn sample_question_counts() {
        let expected = [
            ("geography.txt", 3, 0),
            ("science.txt", 3, 0),
            ("windows.txt", 2, 0),
            ("partial.txt", 2, 1),
        ];

        for (name, questions, skipped) in expected {
            let path = Path::new("tests/samples/").join(name);
            let content = parsing::load(&path)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", path, e));

            let outcome = parsing::parse(&content)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {:?}", path, e));

            assert_eq!(outcome.questions.len(), questions, "questions in {}", name);
            assert_eq!(outcome.skipped.len(), skipped, "skipped in {}", name);
        }
    }

    #[test]
    fn missing_file() {
        let path = Path::new("tests/samples/does-not-exist.txt");
        let error = parsing::load(path).unwrap_err();
        assert_eq!(error.problem, "File not found");
        assert_eq!(error.filename, path);
    }
}
