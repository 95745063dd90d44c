//! Integration tests for resume parsing.

use std::fs;

use resumefmt::parser::{LineKind, ResumeParser};
use resumefmt::{
    parse_file, parse_str, parse_str_with_options, Error, ParseOptions, SectionBody, SectionKind,
};

const FULL_RESUME: &str = "\
JOHN SMITH
Seattle, WA
john.smith@example.com | 206-555-0199 | https://www.linkedin.com/in/johnsmith

PROFESSIONAL SUMMARY

Platform engineer with ten years of experience
building developer tooling.

WORK EXPERIENCE

Contoso Ltd | 03/2019 - Present
Staff Engineer
• Designed the build cache
• Cut CI time by half
  across all repositories

Fabrikam
Software Engineer
2014 - 2019
Maintained the billing service.
• Migrated to Postgres

EDUCATION
• M.S. Computer Science, University of Washington, 2014
• B.S. Mathematics, Oregon State University, 2012

TECHNICAL SKILLS

Languages: Rust, Go, Python
Tools
Docker, Bazel, Terraform

CERTIFICATES

Cloud Native Computing Foundation
• Certified Kubernetes Administrator
Linux Foundation
• LFCS

HONORS & AWARDS

Contoso Ltd
• Engineer of the Year 2021

VOLUNTEERING

Code mentor at a local high school
";

fn section_body(doc: &resumefmt::Document, kind: SectionKind) -> &SectionBody {
    &doc.section(kind)
        .unwrap_or_else(|| panic!("missing {} section", kind))
        .body
}

#[test]
fn test_full_resume_contact() {
    let doc = parse_str(FULL_RESUME);

    assert_eq!(doc.name(), "JOHN SMITH");
    assert_eq!(doc.contact.location.as_deref(), Some("Seattle, WA"));
    assert_eq!(doc.contact.email.as_deref(), Some("john.smith@example.com"));
    assert_eq!(doc.contact.phone.as_deref(), Some("206-555-0199"));
    assert_eq!(
        doc.contact.linkedin.as_deref(),
        Some("https://www.linkedin.com/in/johnsmith")
    );
    assert_eq!(
        doc.summary.as_deref(),
        Some("Platform engineer with ten years of experience building developer tooling.")
    );
}

#[test]
fn test_full_resume_section_order() {
    let doc = parse_str(FULL_RESUME);
    let kinds: Vec<SectionKind> = doc.sections.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Skills,
            SectionKind::Certifications,
            SectionKind::Honors,
            SectionKind::Other,
        ]
    );
    assert_eq!(doc.sections[5].title, "VOLUNTEERING");
}

#[test]
fn test_full_resume_experience() {
    let doc = parse_str(FULL_RESUME);
    let SectionBody::Experience(jobs) = section_body(&doc, SectionKind::Experience) else {
        panic!("expected experience body");
    };

    assert_eq!(jobs.len(), 2);
    let first = &jobs[0].value;
    assert_eq!(first.organization, "Contoso Ltd");
    assert_eq!(first.date_range, "03/2019 - Present");
    assert_eq!(first.role, "Staff Engineer");
    assert_eq!(
        first.bullets,
        vec![
            "Designed the build cache",
            "Cut CI time by half across all repositories"
        ]
    );
    assert!(first.is_current());

    let second = &jobs[1].value;
    assert_eq!(second.date_range, "2014 - 2019");
    assert_eq!(second.details, vec!["Maintained the billing service."]);
    assert_eq!(second.bullets, vec!["Migrated to Postgres"]);
    assert!(!second.is_current());
}

#[test]
fn test_full_resume_education_and_skills() {
    let doc = parse_str(FULL_RESUME);

    let SectionBody::Education(schools) = section_body(&doc, SectionKind::Education) else {
        panic!("expected education body");
    };
    assert_eq!(schools.len(), 2);
    assert!(schools[0].value.text.starts_with("M.S. Computer Science"));

    let SectionBody::Skills(skills) = section_body(&doc, SectionKind::Skills) else {
        panic!("expected skills body");
    };
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[0].value.category.as_deref(), Some("Languages"));
    assert_eq!(skills[0].value.items, vec!["Rust", "Go", "Python"]);
    assert_eq!(skills[1].value.category.as_deref(), Some("Tools"));
    assert_eq!(skills[1].value.items.len(), 3);
}

#[test]
fn test_full_resume_certifications_and_honors() {
    let doc = parse_str(FULL_RESUME);

    let SectionBody::Certifications(certs) = section_body(&doc, SectionKind::Certifications) else {
        panic!("expected certifications body");
    };
    let issuers: Vec<&str> = certs.iter().map(|c| c.value.issuer.as_str()).collect();
    assert_eq!(
        issuers,
        vec!["Cloud Native Computing Foundation", "Linux Foundation"]
    );
    assert_eq!(certs[1].value.items, vec!["LFCS"]);

    let SectionBody::Honors(honors) = section_body(&doc, SectionKind::Honors) else {
        panic!("expected honors body");
    };
    assert_eq!(honors[0].value.items, vec!["Engineer of the Year 2021"]);
}

#[test]
fn test_segmentation_keeps_every_content_line() {
    let segmented = ResumeParser::from_text(FULL_RESUME).segment();
    let expected: Vec<&str> = FULL_RESUME
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect();
    let actual: Vec<&str> = segmented
        .lines()
        .filter(|l| l.kind != LineKind::Blank)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_every_known_heading_any_case() {
    for heading in [
        "summary",
        "Experience",
        "EDUCATION",
        "sKiLlS",
        "Certifications",
        "Honors and Awards",
    ] {
        let text = format!("Jane Doe\n{}\nsomething", heading);
        let segmented = ResumeParser::from_text(text).segment();
        assert_eq!(segmented.sections.len(), 1, "{heading} should open a section");
        assert_eq!(segmented.sections[0].title(), heading);
    }
}

#[test]
fn test_strict_mode_keeps_unknown_heading_as_text() {
    let text = "Jane Doe\n\nEDUCATION\nB.S. Physics\n\nPROJECTS\n\nresumefmt";
    let lenient = parse_str(text);
    assert_eq!(lenient.section_count(), 2);

    let strict = parse_str_with_options(text, ParseOptions::new().strict_headings());
    assert_eq!(strict.section_count(), 1);
    let SectionBody::Education(lines) = &strict.sections[0].body else {
        panic!("expected education body");
    };
    let texts: Vec<&str> = lines.iter().map(|l| l.value.text.as_str()).collect();
    assert_eq!(texts, vec!["B.S. Physics", "PROJECTS", "resumefmt"]);
}

#[test]
fn test_malformed_input_never_fails() {
    let inputs = [
        "",
        "\n\n\n",
        "•",
        "EXPERIENCE",
        "EXPERIENCE\n\n\n• orphan\n-\n*",
        "SKILLS\n:\n,,,\n|",
        "CERTIFICATIONS\n• a\n• b",
        "a\tb\u{FFFD}\u{0007}\nSUMMARY\n\n\n",
    ];
    for input in inputs {
        let doc = parse_str(input);
        assert!(!doc.name().is_empty(), "input {input:?}");
    }
}

#[test]
fn test_parse_file_with_tempfile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jane.txt");
    fs::write(&path, "\u{FEFF}Jane Doe\r\njane@example.com\r\n\r\nSKILLS\r\nRust, Go\r\n").unwrap();

    let doc = parse_file(&path).unwrap();
    assert_eq!(doc.name(), "Jane Doe");
    assert_eq!(doc.contact.email.as_deref(), Some("jane@example.com"));
    assert_eq!(doc.metadata.source.as_deref(), Some("jane.txt"));
    assert_eq!(doc.section_count(), 1);
}

#[test]
fn test_parse_file_rejects_binary_documents() {
    let dir = tempfile::tempdir().unwrap();

    let pdf = dir.path().join("resume.pdf");
    fs::write(&pdf, b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n").unwrap();
    assert!(matches!(parse_file(&pdf), Err(Error::UnsupportedFormat(_))));

    let docx = dir.path().join("resume.docx");
    fs::write(&docx, b"PK\x03\x04\x14\x00\x06\x00").unwrap();
    assert!(matches!(parse_file(&docx), Err(Error::UnsupportedFormat(_))));

    let latin1 = dir.path().join("resume.txt");
    fs::write(&latin1, b"Jos\xE9 Garc\xEDa\n").unwrap();
    assert!(matches!(parse_file(&latin1), Err(Error::Encoding(_))));
}

#[test]
fn test_parse_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, Error::InputUnreadable { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_parse_file_async() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("async.txt");
    fs::write(&path, "Jane Doe\n\nEDUCATION\nB.A. History\n").unwrap();

    let doc = resumefmt::parse_file_async(&path).await.unwrap();
    assert_eq!(doc.name(), "Jane Doe");
    assert_eq!(doc.metadata.source.as_deref(), Some("async.txt"));
    assert_eq!(doc.section_count(), 1);
}

#[test]
fn test_summary_and_skills_document() {
    let doc = parse_str("SUMMARY\n\nHello world\n\nSKILLS\n\nProgramming:\nPython, Go");

    assert_eq!(doc.summary.as_deref(), Some("Hello world"));
    assert_eq!(doc.section_count(), 1);
    let SectionBody::Skills(skills) = &doc.sections[0].body else {
        panic!("expected skills body");
    };
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].value.category.as_deref(), Some("Programming"));
    assert_eq!(skills[0].value.items, vec!["Python", "Go"]);
}

#[test]
fn test_two_line_experience_block() {
    let doc = parse_str("Jane Doe\n\nEXPERIENCE\nAcme Corp\nEngineer\n• Did a thing");
    let SectionBody::Experience(jobs) = &doc.sections[0].body else {
        panic!("expected experience body");
    };
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].value.organization, "Acme Corp");
    assert_eq!(jobs[0].value.role, "Engineer");
    assert_eq!(jobs[0].value.date_range, "");
    assert_eq!(jobs[0].value.bullets, vec!["Did a thing"]);
    assert!(jobs[0].is_complete());
}

#[test]
fn test_unknown_heading_is_other_section() {
    let doc = parse_str("Jane Doe\n\nSKILLS\nRust\n\nPROJECTS\n\nresumefmt\n  text to HTML");
    let projects = doc.section(SectionKind::Other).expect("projects section");
    assert_eq!(projects.title, "PROJECTS");
    assert_eq!(
        projects.body,
        SectionBody::Other {
            text: "resumefmt\n  text to HTML".to_string()
        }
    );
}

#[test]
fn test_short_caps_lines_stay_in_their_section() {
    let doc = parse_str(
        "Jane Doe\n\nEDUCATION\n\nMIT\n\nB.S. Physics, 2015\n\nSKILLS\n\nProgramming:\nPython, Go\n\nAWS\n\nCERTIFICATIONS\nAmazon\n• SA",
    );
    let kinds: Vec<SectionKind> = doc.sections.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Education,
            SectionKind::Skills,
            SectionKind::Certifications
        ]
    );

    let SectionBody::Education(schools) = section_body(&doc, SectionKind::Education) else {
        panic!("expected education body");
    };
    let texts: Vec<&str> = schools.iter().map(|s| s.value.text.as_str()).collect();
    assert_eq!(texts, vec!["MIT", "B.S. Physics, 2015"]);

    let SectionBody::Skills(skills) = section_body(&doc, SectionKind::Skills) else {
        panic!("expected skills body");
    };
    assert_eq!(skills[1].value.category, None);
    assert_eq!(skills[1].value.items, vec!["AWS"]);
}

#[test]
fn test_trailing_caps_line_is_not_an_empty_section() {
    let doc = parse_str("Jane Doe\n\nEDUCATION\nB.S. Physics\n\nHARVARD UNIVERSITY");
    assert_eq!(doc.section_count(), 1);
    let SectionBody::Education(schools) = &doc.sections[0].body else {
        panic!("expected education body");
    };
    assert_eq!(schools.len(), 2);
    assert_eq!(schools[1].value.text, "HARVARD UNIVERSITY");
}
