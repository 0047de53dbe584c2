//! Integration tests for the export pipeline.

mod common;

use common::{pdf_stub, FakeEngine, FakePage, ScriptCanvas};
use scenepdf::{
    export_pdf_with_options, Align, Color, Document, DocumentSettings, Error, ExportOptions,
    FnResolver, FsAssetStore, GeneratorInfo, Item, ItemKind, Layer, Page, PageBackground,
    PdfExporter, PdfImporter, Quality, Rect, SkipReason, TextContent, TextRun,
};

fn no_assets() -> FnResolver<impl Fn(&str) -> Option<std::path::PathBuf>> {
    FnResolver(|_: &str| -> Option<std::path::PathBuf> { None })
}

fn shape(id: &str, rect: Rect, fill: Option<Color>) -> Item {
    Item::new(
        id,
        rect,
        ItemKind::Shape {
            fill,
            stroke: None,
            stroke_width: 0.0,
        },
    )
}

fn one_page_doc(items: Vec<Item>) -> Document {
    let mut doc = Document::with_defaults(GeneratorInfo::new("test", "safe", "smart"));
    let mut page = Page::new("p-0", "Test");
    let mut layer = Layer::new("main", "Main");
    for item in items {
        layer.add_item(item);
    }
    page.add_layer(layer);
    doc.add_page(page);
    doc
}

fn render(doc: &Document, options: ExportOptions) -> (String, scenepdf::ExportReport) {
    let outcome = export_pdf_with_options(doc, ScriptCanvas::new(), &no_assets(), options).unwrap();
    (String::from_utf8(outcome.bytes).unwrap(), outcome.report)
}

#[test]
fn empty_document_is_a_hard_failure() {
    let doc = Document::with_defaults(GeneratorInfo::new("test", "safe", "smart"));
    let result = PdfExporter::new().export(&doc, ScriptCanvas::new(), &no_assets());
    assert!(matches!(result, Err(Error::EmptyDocument)));
}

#[test]
fn zero_bleed_yields_exact_page_size_and_no_crop_marks() {
    let doc = one_page_doc(vec![]);
    let options = ExportOptions::new().with_bleed_mm(0.0).with_crop_marks(true);
    let (script, _) = render(&doc, options);

    assert!(script.contains("page 595.0000x842.0000"));
    assert!(!script.contains("line"));
}

#[test]
fn bleed_inflates_page_and_offsets_items() {
    let doc = one_page_doc(vec![shape(
        "s1",
        Rect::new(10.0, 10.0, 50.0, 50.0),
        Some(Color::BLACK),
    )]);
    // 3mm = 8.5039... pt
    let (script, _) = render(&doc, ExportOptions::new().with_bleed_mm(3.0));

    let bleed = 3.0 * 72.0 / 25.4;
    assert!(script.contains(&format!(
        "page {:.4}x{:.4}",
        595.0 + 2.0 * bleed,
        842.0 + 2.0 * bleed
    )));
    assert!(script.contains(&format!("fill [{:.3},{:.3},50.000,50.000]", 10.0 + bleed, 10.0 + bleed)));
}

#[test]
fn crop_marks_draw_eight_lines_at_bleed_boundary() {
    let doc = one_page_doc(vec![]);
    let options = ExportOptions::new().with_bleed_mm(3.0).with_crop_marks(true);
    let (script, _) = render(&doc, options);

    let mark_count = script.lines().filter(|l| l.starts_with("line")).count();
    assert_eq!(mark_count, 8);
    assert!(script.contains("w=0.5"));
}

#[test]
fn custom_page_size_from_settings() {
    let mut doc = one_page_doc(vec![]);
    doc.settings = DocumentSettings {
        page_width: Some(300.0),
        page_height: Some(400.0),
        ..DocumentSettings::magazine_defaults()
    };
    let (script, _) = render(&doc, ExportOptions::new().with_bleed_mm(0.0));
    assert!(script.contains("page 300.0000x400.0000"));
}

#[test]
fn export_is_deterministic() {
    let doc = one_page_doc(vec![
        shape("s1", Rect::new(5.0, 5.0, 20.0, 20.0), Some(Color::BLACK)),
        Item::new(
            "t1",
            Rect::new(40.0, 40.0, 200.0, 30.0),
            ItemKind::TextFrame {
                rich_text_runs: None,
                text: Some(TextContent::Plain("deterministic".into())),
                style_ref: None,
                font_size: Some(14.0),
                color: None,
                align: Align::Center,
                padding: 0.0,
            },
        ),
    ]);
    let options = ExportOptions::new().with_crop_marks(true).with_watermark(true);

    let (a, _) = render(&doc, options.clone());
    let (b, _) = render(&doc, options);
    assert_eq!(a, b);
}

#[test]
fn watermark_toggles_visible_marking() {
    let doc = one_page_doc(vec![shape(
        "s1",
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Some(Color::BLACK),
    )]);

    let (with, _) = render(&doc, ExportOptions::new().with_watermark(true));
    let (without, _) = render(&doc, ExportOptions::new().with_watermark(false));

    assert!(with.contains("overlay"));
    assert!(with.contains("PREVIEW"));
    assert!(with.contains("rot=25"));
    assert!(!without.contains("PREVIEW"));
    assert!(with.len() > without.len());
}

#[test]
fn text_frame_defaults_apply_without_style_resolution() {
    let doc = one_page_doc(vec![Item::new(
        "t1",
        Rect::new(0.0, 0.0, 100.0, 40.0),
        ItemKind::TextFrame {
            rich_text_runs: None,
            text: Some(TextContent::Plain("plain words".into())),
            style_ref: Some("NoSuchStyle".into()),
            font_size: None,
            color: None,
            align: Align::Left,
            padding: 0.0,
        },
    )]);
    let (script, report) = render(&doc, ExportOptions::new().with_bleed_mm(0.0));

    assert!(script.contains("size=12"));
    assert!(script.contains("align=Left"));
    assert!(script.contains("(0.000,0.000,0.000)"));
    assert!(report.is_clean());
}

#[test]
fn rich_runs_take_precedence_over_plain_text() {
    let doc = one_page_doc(vec![Item::new(
        "t1",
        Rect::new(0.0, 0.0, 100.0, 40.0),
        ItemKind::TextFrame {
            rich_text_runs: Some(vec![TextRun::plain("from "), TextRun::plain("runs")]),
            text: Some(TextContent::Plain("from plain".into())),
            style_ref: None,
            font_size: None,
            color: None,
            align: Align::Left,
            padding: 0.0,
        },
    )]);
    let (script, _) = render(&doc, ExportOptions::default());
    assert!(script.contains("\"from runs\""));
    assert!(!script.contains("from plain"));
}

#[test]
fn empty_text_frame_is_skipped_with_reason() {
    let doc = one_page_doc(vec![Item::new(
        "t1",
        Rect::new(0.0, 0.0, 100.0, 40.0),
        ItemKind::TextFrame {
            rich_text_runs: None,
            text: Some(TextContent::Plain("   ".into())),
            style_ref: None,
            font_size: None,
            color: None,
            align: Align::Left,
            padding: 0.0,
        },
    )]);
    let (script, report) = render(&doc, ExportOptions::default());

    assert!(!script.contains("text ["));
    assert_eq!(report.skips.len(), 1);
    assert_eq!(report.skips[0].reason, SkipReason::EmptyText);
    assert_eq!(report.skips[0].id, "t1");
}

#[test]
fn missing_asset_skips_item_but_not_the_page() {
    let doc = one_page_doc(vec![
        Item::new(
            "im1",
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ItemKind::ImageFrame {
                asset_ref: "gone.png".into(),
                fit_mode: Default::default(),
                crop: Rect::unit(),
                locked: false,
                role: None,
            },
        ),
        shape("s1", Rect::new(10.0, 10.0, 40.0, 40.0), Some(Color::BLACK)),
    ]);
    let (script, report) = render(&doc, ExportOptions::default());

    assert!(!script.contains("image"));
    assert!(script.contains("fill"));
    assert_eq!(report.skips.len(), 1);
    assert_eq!(
        report.skips[0].reason,
        SkipReason::MissingAsset("gone.png".into())
    );
}

#[test]
fn hidden_layers_are_not_rendered() {
    let mut doc = Document::with_defaults(GeneratorInfo::new("test", "safe", "smart"));
    let mut page = Page::new("p-0", "Test");

    let mut hidden = Layer::new("hidden", "Hidden");
    hidden.visible = false;
    hidden.add_item(shape("h1", Rect::new(0.0, 0.0, 50.0, 50.0), Some(Color::BLACK)));

    let mut locked = Layer::locked("locked", "Locked");
    locked.add_item(shape(
        "l1",
        Rect::new(100.0, 100.0, 50.0, 50.0),
        Some(Color::rgb(1.0, 0.0, 0.0)),
    ));

    page.add_layer(hidden);
    page.add_layer(locked);
    doc.add_page(page);

    let (script, report) = render(&doc, ExportOptions::new().with_bleed_mm(0.0));

    // Locked layers render; hidden ones do not.
    assert!(script.contains("fill [100.000,100.000"));
    assert!(!script.contains("fill [0.000,0.000,50.000"));
    assert_eq!(report.skips.len(), 1);
    assert_eq!(report.skips[0].reason, SkipReason::HiddenLayer);
    assert_eq!(report.skips[0].id, "hidden");
}

#[test]
fn page_background_fill_paints_before_layers() {
    let mut doc = one_page_doc(vec![shape(
        "s1",
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Some(Color::BLACK),
    )]);
    doc.pages[0].background = Some(PageBackground {
        fill: Some(Color::rgb(0.9, 0.9, 0.9)),
    });
    let (script, _) = render(&doc, ExportOptions::new().with_bleed_mm(0.0));

    let bg_pos = script.find("fill [0.000,0.000,595.000,842.000]").unwrap();
    let item_pos = script.find("fill [0.000,0.000,10.000,10.000]").unwrap();
    assert!(bg_pos < item_pos);
}

#[test]
fn shape_without_fill_or_stroke_paints_nothing() {
    let doc = one_page_doc(vec![Item::new(
        "s1",
        Rect::new(0.0, 0.0, 50.0, 50.0),
        ItemKind::Shape {
            fill: None,
            stroke: None,
            stroke_width: 2.0,
        },
    )]);
    let (script, report) = render(&doc, ExportOptions::default());
    assert!(!script.contains("fill ["));
    assert!(!script.contains("stroke ["));
    assert!(report.is_clean());
}

#[test]
fn line_endpoint_derives_from_rect_when_absent() {
    let doc = one_page_doc(vec![Item::new(
        "ln",
        Rect::new(10.0, 20.0, 30.0, 40.0),
        ItemKind::Line {
            stroke: None,
            stroke_width: 1.5,
            x2: None,
            y2: None,
        },
    )]);
    let (script, _) = render(&doc, ExportOptions::new().with_bleed_mm(0.0));
    assert!(script.contains("line (10.000,20.000)->(40.000,60.000)"));
    assert!(script.contains("w=1.5"));
}

#[test]
fn text_placement_failure_is_skipped_not_fatal() {
    let doc = one_page_doc(vec![Item::new(
        "t1",
        Rect::new(0.0, 0.0, 100.0, 40.0),
        ItemKind::TextFrame {
            rich_text_runs: None,
            text: Some(TextContent::Plain("overflowing".into())),
            style_ref: None,
            font_size: None,
            color: None,
            align: Align::Left,
            padding: 0.0,
        },
    )]);
    let canvas = ScriptCanvas {
        fail_text_boxes: true,
        ..ScriptCanvas::new()
    };
    let outcome = PdfExporter::new().export(&doc, canvas, &no_assets()).unwrap();
    assert_eq!(outcome.report.skips.len(), 1);
    assert!(matches!(
        outcome.report.skips[0].reason,
        SkipReason::TextPlacement(_)
    ));
}

#[test]
fn quality_tier_reaches_the_canvas() {
    let doc = one_page_doc(vec![]);
    let (web, _) = render(&doc, ExportOptions::new().with_quality(Quality::Web));
    let (print, _) = render(&doc, ExportOptions::new().with_quality(Quality::Print));
    assert!(web.ends_with("finish Web"));
    assert!(print.ends_with("finish Print"));
}

#[test]
fn imported_document_exports_with_resolvable_assets() {
    // Full pipeline: import against the filesystem store, then export
    // resolving through the same store.
    let dir = tempfile::tempdir().unwrap();
    let store = FsAssetStore::open(dir.path()).unwrap();
    let engine = FakeEngine::with_pages(vec![FakePage::a4()]);

    let outcome = PdfImporter::new()
        .import(&engine, &store, &pdf_stub())
        .unwrap();
    assert_eq!(outcome.created_assets.len(), 1);

    let export = PdfExporter::new()
        .export(&outcome.document, ScriptCanvas::new(), &store)
        .unwrap();
    let script = String::from_utf8(export.bytes).unwrap();

    assert!(script.contains("image ["));
    assert!(export.report.is_clean());
}
