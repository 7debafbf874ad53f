//! Benchmarks for pdfpages extraction and rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use pdfpages::render::{to_json, to_markdown};
use pdfpages::{JsonFormat, MarkdownOptions};

const IMAGE_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x10\x00\x00\x00\x10";

/// Creates a synthetic PDF with one line of text and one image per page.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::with_capacity(page_count);
    for i in 0..page_count {
        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => 16i64,
                "Height" => 16i64,
            },
            IMAGE_BYTES.to_vec(),
        ));
        let text = format!(
            "BT /F1 12 Tf 100 700 Td (Page {} - benchmark content for extraction.) Tj ET\nq 16 0 0 16 72 400 cm /Im0 Do Q",
            i + 1
        );
        let content_id = doc.add_object(Stream::new(Dictionary::new(), text.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
                "XObject" => dictionary! { "Im0" => image_id },
            },
        });
        kids.push(Object::from(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => page_count as i64,
            "Kids" => kids,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save benchmark PDF");
    buf
}

/// Benchmark PDF format detection.
fn bench_format_detection(c: &mut Criterion) {
    let pdf_data = create_test_pdf(1);
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("detect_valid_pdf", |b| {
        b.iter(|| pdfpages::detect_format_from_bytes(black_box(&pdf_data)).unwrap());
    });

    c.bench_function("detect_non_pdf", |b| {
        b.iter(|| pdfpages::detect_format_from_bytes(black_box(non_pdf_data)).is_err());
    });
}

/// Benchmark page extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for page_count in [1, 10, 50] {
        let data = create_test_pdf(page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| pdfpages::extract_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark JSON and Markdown rendering of an extracted document.
fn bench_rendering(c: &mut Criterion) {
    let doc = pdfpages::extract_bytes(&create_test_pdf(50)).unwrap();
    let markdown_options = MarkdownOptions::default();

    c.bench_function("render_json_pretty", |b| {
        b.iter(|| to_json(black_box(&doc), JsonFormat::Pretty).unwrap());
    });

    c.bench_function("render_markdown", |b| {
        b.iter(|| to_markdown(black_box(&doc), &markdown_options));
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_extraction,
    bench_rendering,
);
criterion_main!(benches);
