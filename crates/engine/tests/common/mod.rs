//! PDF fixtures built in memory with lopdf.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF with one page per entry; each line is its own text object.
pub fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    to_bytes(build_document(pages))
}

pub fn build_document(pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 780 - (i as i64) * 16;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new("Td", vec![40.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

pub fn to_bytes(mut doc: Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize pdf");
    bytes
}

/// Three claim pages where page 2 points at a content stream that does not exist.
pub fn pdf_with_missing_page_content() -> Vec<u8> {
    let mut doc = build_document(&[
        &["Name of claimant: Ramesh Kumar", "Village: Badi"],
        &["Name of claimant: Lost Page", "Village: Nowhere"],
        &["Name of claimant: Sita Bai", "Village: Kosa"],
    ]);

    let page_id = doc.get_pages()[&2];
    doc.get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .expect("page 2 dictionary")
        .set("Contents", Object::Reference((9999, 0)));
    to_bytes(doc)
}

/// A two-page FRA claim form: a structured sample on page 1, free text on page 2.
pub fn claim_form_pdf() -> Vec<u8> {
    build_pdf(&[
        &[
            "FORM A - CLAIM FOR RIGHTS TO FOREST LAND",
            r#"Structured-sample: {"name": "Ramesh Kumar", "village": "Badi", "district": "Mandla", "state": "Madhya Pradesh", "lat": 22.5981, "lon": 80.3714, "extent_ha": 1.2}"#,
        ],
        &[
            "Name of claimant: Sita Bai",
            "Village: Kosa",
            "District: Balaghat",
        ],
    ])
}
