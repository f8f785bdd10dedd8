#[cfg(test)]
mod verify {
    use quizbank::formatting::*;
    use quizbank::parsing;
    use quizbank::rendering;

    fn trim(text: &str) -> &str {
        let head = text.trim_start_matches('\n');
        let tail = head.trim_end_matches(' ');
        tail
    }

    #[test]
    fn canonical_form() {
        let outcome = parsing::parse(trim(
            r#"
1) What is the capital of France?
a) London
b) Paris
ANS: b

2. Which are even?
A: 2
B: 3
C: 4
ANSWER KEY = A & C
            "#,
        ))
        .unwrap();

        let result = rendering::render(&Identity, &outcome.questions);
        assert_eq!(
            result,
            trim(
                r#"
What is the capital of France?
A. London
B. Paris
ANSWER: B

Which are even?
A. 2
B. 3
C. 4
ANSWER: A, C
                "#
            )
        );
    }

    #[test]
    fn formatted_output_parses_to_same_questions() {
        let original = parsing::parse(trim(
            r#"
Read the passage.

It was the best of times.
Which novel is this from?
A. Great Expectations
B. A Tale of Two Cities,
   by Charles Dickens

   (1859)
C. Bleak House
ANSWER: B

Which of these are primary colours?
A. Red
B. Green
C. Blue
ANSWER: A and C
            "#,
        ))
        .unwrap();

        let text = rendering::render(&Identity, &original.questions);
        let reparsed = parsing::parse(&text).unwrap();

        assert_eq!(reparsed.questions, original.questions);
        assert!(reparsed.is_clean());
    }

    #[test]
    fn stem_starting_with_a_number() {
        let original = parsing::parse(trim(
            r#"
3. 1066 - Who won the Battle of Hastings?
A. William
B. Harold
ANSWER: A
            "#,
        ))
        .unwrap();

        assert_eq!(
            original.questions[0].stem,
            "1066 - Who won the Battle of Hastings?"
        );

        let text = rendering::render(&Identity, &original.questions);
        let reparsed = parsing::parse(&text).unwrap();

        assert_eq!(reparsed.questions, original.questions);
    }

    #[test]
    fn sample_files_survive_formatting() {
        for name in ["geography.txt", "science.txt", "windows.txt"] {
            let path = std::path::Path::new("tests/samples/").join(name);
            let content = parsing::load(&path)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", path, e));

            let original = parsing::parse(&content).unwrap();
            let text = rendering::render(&Identity, &original.questions);
            let reparsed = parsing::parse(&text).unwrap();

            assert_eq!(reparsed.questions, original.questions, "in {}", name);
        }
    }
}
