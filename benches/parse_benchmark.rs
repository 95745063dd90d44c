//! Benchmarks for resumefmt parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic resumes with a growing number of jobs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic resume with the given number of experience entries.
fn create_test_resume(job_count: usize) -> String {
    let mut text = String::new();

    text.push_str("Jane Doe\n");
    text.push_str("Austin, TX | jane.doe@example.com | (555) 123-4567\n");
    text.push_str("linkedin.com/in/janedoe\n\n");

    text.push_str("SUMMARY\n\n");
    text.push_str("Backend engineer with a long record of shipping reliable services.\n\n");

    text.push_str("EXPERIENCE\n\n");
    for i in 0..job_count {
        text.push_str(&format!("Company {} Inc.\n", i + 1));
        text.push_str("Senior Software Engineer\n");
        text.push_str(&format!("01/{} - 12/{}\n", 2000 + i, 2001 + i));
        for j in 0..4 {
            text.push_str(&format!(
                "• Delivered project {} which reduced latency by {}%\n",
                j + 1,
                10 + j
            ));
        }
        text.push('\n');
    }

    text.push_str("EDUCATION\n");
    text.push_str("B.S. Computer Science, State University, 2000\n\n");

    text.push_str("SKILLS\n\n");
    text.push_str("Languages:\nRust, Go, Python, TypeScript\n\n");
    text.push_str("Infrastructure:\nKubernetes, Terraform, AWS\n\n");

    text.push_str("CERTIFICATIONS\n");
    text.push_str("Amazon Web Services\n• Solutions Architect\n• Developer\n");

    text
}

/// Benchmark input detection.
fn bench_format_detection(c: &mut Criterion) {
    let text = create_test_resume(5).into_bytes();
    let pdf_data = b"%PDF-1.7\n%binary content";

    c.bench_function("detect_text", |b| {
        b.iter(|| resumefmt::detect_format_from_bytes(black_box(&text)).is_ok());
    });

    c.bench_function("detect_pdf_rejected", |b| {
        b.iter(|| resumefmt::detect_format_from_bytes(black_box(pdf_data)).is_err());
    });
}

/// Benchmark parsing at various sizes.
fn bench_resume_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("resume_parsing");

    for job_count in [1, 10, 50].iter() {
        let text = create_test_resume(*job_count);

        group.bench_function(format!("{}_jobs", job_count), |b| {
            b.iter(|| resumefmt::parse_str(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark HTML rendering of a parsed resume.
fn bench_html_rendering(c: &mut Criterion) {
    let doc = resumefmt::parse_str(&create_test_resume(10));
    let options = resumefmt::RenderOptions::default();

    c.bench_function("render_html_10_jobs", |b| {
        b.iter(|| resumefmt::render::to_html(black_box(&doc), &options).unwrap());
    });
}

/// Benchmark builder pattern overhead.
fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("builder_creation", |b| {
        b.iter(|| {
            let _builder = resumefmt::Resumefmt::new()
                .strict_headings()
                .with_frontmatter()
                .with_cleanup(resumefmt::CleanupPreset::Standard);
        });
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_resume_parsing,
    bench_html_rendering,
    bench_builder_creation,
);
criterion_main!(benches);
