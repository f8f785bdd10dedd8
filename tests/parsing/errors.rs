#[cfg(test)]
mod syntax {
    use quizbank::language::*;
    use quizbank::parsing;

    /// Helper function to check that parsing fails for want of any valid
    /// question, and that the given issue was among the reasons why.
    fn expect_issue(content: &str, expected: &str) {
        let result = parsing::parse(content);
        match result {
            Ok(_) => panic!(
                "Expected parsing to fail, but it succeeded for input: {}",
                content
            ),
            Err(ParseError::NoValidQuestions {
                skipped,
                global_issues,
            }) => {
                let found_expected = skipped
                    .iter()
                    .flat_map(|skipped| skipped.issues.iter())
                    .chain(global_issues.iter())
                    .any(|issue| issue.message == expected);

                if !found_expected {
                    panic!(
                        "Expected issue {:?} but got: {:?} {:?} for input '{}'",
                        expected, skipped, global_issues, content
                    );
                }
            }
            Err(error) => panic!("Expected skipped questions, but got {:?}", error),
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(parsing::parse(""), Err(ParseError::EmptyInput));
        assert_eq!(parsing::parse("  \n\t\r\n  "), Err(ParseError::EmptyInput));
        assert_eq!(parsing::parse("\u{feff}\n"), Err(ParseError::EmptyInput));
        assert_eq!(parsing::preview("\r\r"), Err(ParseError::EmptyInput));
    }

    #[test]
    fn missing_answer() {
        expect_issue(
            r#"
What is 6 x 7?
A. 42
B. 67
            "#
            .trim_ascii(),
            "Each question must specify a correct answer via the ANSWER directive.",
        );
    }

    #[test]
    fn too_few_options() {
        expect_issue(
            r#"
What is 6 x 7?
A. 42
ANSWER: A
            "#
            .trim_ascii(),
            "Each question must include at least two options.",
        );
    }

    #[test]
    fn no_options_at_all() {
        expect_issue(
            r#"
What is 6 x 7?
            "#
            .trim_ascii(),
            "A question is missing answer options",
        );
    }

    #[test]
    fn answer_before_options() {
        expect_issue(
            r#"
What is 6 x 7?
ANSWER: A
            "#
            .trim_ascii(),
            "ANSWER directive appeared before any options were defined",
        );
    }

    #[test]
    fn answer_names_missing_option() {
        expect_issue(
            r#"
What is 6 x 7?
A. 42
B. 67
ANSWER: C
            "#
            .trim_ascii(),
            "ANSWER references option C which was not provided",
        );
    }

    #[test]
    fn answer_matches_nothing() {
        expect_issue(
            r#"
What is 6 x 7?
A. 42
B. 67
ANSWER: forty-two
            "#
            .trim_ascii(),
            "ANSWER directive is missing option letters",
        );
    }

    #[test]
    fn only_stray_lines() {
        expect_issue(
            r#"
A. an option
ANSWER: A
            "#
            .trim_ascii(),
            "Option encountered before the question text",
        );
    }

    #[test]
    fn failure_carries_every_skipped_question() {
        let result = parsing::parse(
            r#"
First?
A. one
ANSWER: A

Second?
A. one
B. two
ANSWER: Z
            "#
            .trim_ascii(),
        );

        match result {
            Err(ParseError::NoValidQuestions {
                skipped,
                global_issues,
            }) => {
                assert!(global_issues.is_empty());
                assert_eq!(skipped.len(), 2);
                assert_eq!(skipped[0].start_line, 1);
                assert_eq!(skipped[0].end_line, 3);
                assert_eq!(skipped[1].start_line, 5);
                assert_eq!(skipped[1].end_line, 8);
            }
            other => panic!("Expected NoValidQuestions, got {:?}", other),
        }
    }
}
