use std::collections::HashMap;

use ini::{Document, Group};

/// Whether a case expects the parse to produce its document or anything but it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Equal,
    NotEqual,
}

#[derive(Debug)]
struct Case {
    name: &'static str,
    input: &'static str,
    document: Document,
    expect: Expect,
}

impl Case {
    fn equal(name: &'static str, input: &'static str, document: Document) -> Self {
        Self {
            name,
            input,
            document,
            expect: Expect::Equal,
        }
    }

    fn not_equal(name: &'static str, input: &'static str, document: Document) -> Self {
        Self {
            name,
            input,
            document,
            expect: Expect::NotEqual,
        }
    }
}

fn cases() -> Vec<Case> {
    let single_section = "
[section_name]
name1=value1
name2=value2
";

    vec![
        Case::equal("empty", "", Document::default()),
        Case::equal(
            "default section",
            "
name1=value1
name2=value2
",
            Document::with_default(Group::from([("name1", "value1"), ("name2", "value2")])),
        ),
        Case::equal(
            "comments",
            "
;name1=value1
name2=value2 ; a comment
",
            Document::with_default(Group::from([("name2", "value2")])),
        ),
        Case::equal(
            "single section",
            single_section,
            Document::with_sections(HashMap::from([(
                "section_name".to_owned(),
                Group::from([("name1", "value1"), ("name2", "value2")]),
            )])),
        ),
        Case::not_equal("single section", single_section, Document::default()),
        Case::equal(
            "mixed sections",
            "
name=value
[section1]
name1=value1
[section2]
name3=value3
[section1]
name2=value2
",
            Document::new(
                Group::from([("name", "value")]),
                HashMap::from([
                    (
                        "section1".to_owned(),
                        Group::from([("name1", "value1"), ("name2", "value2")]),
                    ),
                    ("section2".to_owned(), Group::from([("name3", "value3")])),
                ]),
            ),
        ),
    ]
}

/// Run every built-in case. See [`run_cases`].
pub fn run() -> Result<usize, &'static str> {
    run_cases(&cases())
}

/// Run `cases` in order, stopping at the first mismatch.
///
/// Returns the number of cases that passed, or the name of the one that failed.
fn run_cases(cases: &[Case]) -> Result<usize, &'static str> {
    for case in cases {
        let actual = ini::parse(case.input);
        let passed = match case.expect {
            Expect::Equal => actual == case.document,
            Expect::NotEqual => actual != case.document,
        };

        if !passed {
            eprint!("{}", render_failure(case, &actual));
            return Err(case.name);
        }

        println!("TEST PASS: {}", case.name);
    }

    log::info!("{} self-test cases passed", cases.len());
    Ok(cases.len())
}

fn render_failure(case: &Case, actual: &Document) -> String {
    let (relation, label) = match case.expect {
        Expect::Equal => ("expected was not equal to actual", "expected"),
        Expect::NotEqual => ("unexpected was equal to actual", "unexpected"),
    };

    format!(
        "TEST FAIL: {name}\n{relation}\n{:=<37}\n{input}\n{:=<37}\n{expected}\n{:=<37}\n{actual}\n",
        "input:",
        format!("{label}:"),
        "actual:",
        name = case.name,
        input = case.input,
        expected = case.document,
    )
}
