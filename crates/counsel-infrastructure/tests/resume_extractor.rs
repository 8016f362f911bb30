use counsel_core::CounselError;
use counsel_infrastructure::{extract_pdf_file, extract_pdf_text};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use tempfile::TempDir;

fn add_page(doc: &mut Document, pages_id: ObjectId, resources_id: ObjectId, line: &str) -> ObjectId {
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(line)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    })
}

/// Builds a PDF whose pages show `lines` in order. Page objects are created
/// in reverse so object order and page order disagree.
fn build_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut page_ids: Vec<ObjectId> = lines
        .iter()
        .rev()
        .map(|line| add_page(&mut doc, pages_id, resources_id, line))
        .collect();
    page_ids.reverse();

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
        "Count" => page_ids.len() as i64,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_two_pages_concatenate_in_page_order() {
    let bytes = build_pdf(&["Jane Doe - Page one", "Rust Engineer - Page two"]);

    let text = extract_pdf_text(&bytes).unwrap();

    assert_eq!(text, "Jane Doe - Page oneRust Engineer - Page two");
}

#[test]
fn test_pages_are_joined_without_separator() {
    let bytes = build_pdf(&["AAA", "BBB", "CCC"]);

    assert_eq!(extract_pdf_text(&bytes).unwrap(), "AAABBBCCC");
}

#[test]
fn test_not_a_pdf_is_extraction_error() {
    let err = extract_pdf_text(b"just some text").unwrap_err();
    assert!(matches!(err, CounselError::Extraction(_)));
}

#[test]
fn test_file_helpers() {
    let temp_dir = TempDir::new().unwrap();

    let pdf_path = temp_dir.path().join("resume.pdf");
    std::fs::write(&pdf_path, build_pdf(&["Only page"])).unwrap();
    assert!(extract_pdf_file(&pdf_path).unwrap().contains("Only page"));

    let missing = temp_dir.path().join("missing.pdf");
    assert!(extract_pdf_file(&missing).unwrap_err().is_not_found());

    let docx = temp_dir.path().join("resume.docx");
    std::fs::write(&docx, b"PK").unwrap();
    assert!(matches!(
        extract_pdf_file(&docx).unwrap_err(),
        CounselError::Extraction(_)
    ));
}
