use chrono_tz::America::Sao_Paulo;
use serde_json::json;

use super::*;
use crate::notification::SectionBody;
use crate::testing::{
    MemoryAttachments, MemoryBlobs, MemorySubmissions, RecordingSink, file, sample_data,
};

type TestPipeline =
    SubmissionPipeline<MemorySubmissions, MemoryAttachments, MemoryBlobs, RecordingSink>;

struct Harness {
    pipeline: TestPipeline,
    submissions: Arc<MemorySubmissions>,
    attachments: Arc<MemoryAttachments>,
    sink: Arc<RecordingSink>,
}

fn harness(submissions: MemorySubmissions, blobs: MemoryBlobs, sink: RecordingSink) -> Harness {
    let submissions = Arc::new(submissions);
    let attachments = Arc::new(MemoryAttachments::default());
    let sink = Arc::new(sink);
    let config = PipelineConfig {
        route: NotificationRoute {
            from: "Ficha Cadastral <onboarding@example.com>".into(),
            to: vec!["comercial@example.com".into(), "backoffice@example.com".into()],
        },
        timezone: Sao_Paulo,
    };

    Harness {
        pipeline: SubmissionPipeline::new(
            submissions.clone(),
            AttachmentProcessor::new(attachments.clone(), Arc::new(blobs)),
            sink.clone(),
            config,
        ),
        submissions,
        attachments,
        sink,
    }
}

fn default_harness() -> Harness {
    harness(
        MemorySubmissions::default(),
        MemoryBlobs::default(),
        RecordingSink::default(),
    )
}

fn request(files: Vec<crate::attachment::FileUpload>) -> SubmissionRequest {
    SubmissionRequest {
        data: Some(sample_data()),
        files,
    }
}

#[tokio::test]
async fn test_submission_without_files() {
    let h = default_harness();

    let receipt = h.pipeline.submit(request(vec![])).await.expect("accepted");

    let stored = h.submissions.records();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].0, receipt.submission_id);
    assert_eq!(stored[0].1.company.name, "Acme LLC");
    assert!(receipt.attachment_links.is_empty());
    assert!(receipt.notified);

    let sent = h.sink.sent();
    assert_eq!(sent.len(), 1);
    let (route, notification) = &sent[0];
    assert_eq!(route.to.len(), 2);
    assert_eq!(notification.subject, "Nova Ficha Cadastral - Acme LLC");
    assert!(notification.section("Arquivos Anexados").is_none());
}

#[tokio::test]
async fn test_submission_with_files_links_every_upload() {
    let h = default_harness();

    let receipt = h
        .pipeline
        .submit(request(vec![
            file("file_contrato_social", "contrato.pdf", b"%PDF"),
            file("file_cartao_cnpj", "cnpj.pdf", b"%PDF"),
        ]))
        .await
        .expect("accepted");

    let rows = h.attachments.rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.submission_id == receipt.submission_id));
    assert_eq!(receipt.attachment_links.len(), 2);

    let (_, notification) = &h.sink.sent()[0];
    match &notification.section("Arquivos Anexados").expect("links listed").body {
        SectionBody::Lines(lines) => {
            assert_eq!(lines.len(), 2);
            assert!(lines.iter().any(|l| l.starts_with("file_contrato_social: https://")));
            assert!(lines.iter().any(|l| l.starts_with("file_cartao_cnpj: https://")));
        }
        other => panic!("unexpected body {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_attachment_does_not_fail_submission() {
    let h = harness(
        MemorySubmissions::default(),
        MemoryBlobs::failing_uploads(&["broken.pdf"]),
        RecordingSink::default(),
    );

    let receipt = h
        .pipeline
        .submit(request(vec![
            file("file_ok", "ok.pdf", b"ok"),
            file("file_broken", "broken.pdf", b"no"),
        ]))
        .await
        .expect("accepted despite the failed upload");

    assert_eq!(receipt.attachment_links.len(), 1);
    assert!(receipt.attachment_links[0].starts_with("file_ok: "));
    assert_eq!(h.attachments.rows().len(), 1);
}

#[tokio::test]
async fn test_missing_data_field_is_malformed() {
    let h = default_harness();

    let err = h
        .pipeline
        .submit(SubmissionRequest {
            data: None,
            files: vec![file("file_rg", "rg.pdf", b"x")],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::MalformedPayload(_)));
    assert!(h.submissions.records().is_empty());
    assert!(h.attachments.rows().is_empty());
    assert!(h.sink.sent().is_empty());
}

#[tokio::test]
async fn test_invalid_json_is_malformed() {
    let h = default_harness();

    let err = h
        .pipeline
        .submit(SubmissionRequest {
            data: Some("{\"companyName\": ".into()),
            files: vec![],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::MalformedPayload(_)));
    assert!(h.submissions.records().is_empty());
}

#[tokio::test]
async fn test_blank_required_field_stops_before_insert() {
    let h = default_harness();
    let mut data: serde_json::Value =
        serde_json::from_str(&sample_data()).expect("sample is json");
    data["companyCnpj"] = json!("   ");

    let err = h
        .pipeline
        .submit(SubmissionRequest {
            data: Some(data.to_string()),
            files: vec![],
        })
        .await
        .unwrap_err();

    assert_eq!(err, SubmissionError::MissingField("companyCnpj"));
    assert!(h.submissions.records().is_empty());
    assert!(h.sink.sent().is_empty());
}

#[tokio::test]
async fn test_persistence_failure_is_fatal() {
    let h = harness(
        MemorySubmissions::failing(),
        MemoryBlobs::default(),
        RecordingSink::default(),
    );

    let err = h
        .pipeline
        .submit(request(vec![file("file_rg", "rg.pdf", b"x")]))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::PersistenceFailure(_)));
    assert!(h.attachments.rows().is_empty());
    assert!(h.sink.sent().is_empty());
}

#[tokio::test]
async fn test_notification_failure_keeps_success() {
    let h = harness(
        MemorySubmissions::default(),
        MemoryBlobs::default(),
        RecordingSink::failing(),
    );

    let receipt = h.pipeline.submit(request(vec![])).await.expect("accepted");

    assert!(!receipt.notified);
    assert_eq!(h.submissions.records().len(), 1);
}

#[tokio::test]
async fn test_notification_time_uses_configured_zone() {
    let h = default_harness();
    h.pipeline.submit(request(vec![])).await.expect("accepted");

    // 17:07:09 UTC is 14:07:09 in São Paulo.
    let (_, notification) = &h.sink.sent()[0];
    assert_eq!(notification.submitted_at, "05/03/2024, 14:07:09");
}

#[tokio::test]
async fn test_flagless_additional_address_is_not_rendered() {
    let h = default_harness();
    let mut data: serde_json::Value =
        serde_json::from_str(&sample_data()).expect("sample is json");
    data["additionalCity"] = json!("Campinas");
    data["hasAdditionalAddress"] = json!(false);

    let receipt = h
        .pipeline
        .submit(SubmissionRequest {
            data: Some(data.to_string()),
            files: vec![],
        })
        .await
        .expect("accepted");

    assert_eq!(receipt.record.additional_address, None);
    let (_, notification) = &h.sink.sent()[0];
    assert!(notification.section("Endereço Adicional").is_none());
}

#[test]
fn test_registration_errors_keep_their_kind() {
    use crate::registration::RegistrationError;

    assert_eq!(
        SubmissionError::from(RegistrationError::MissingField("executiveCpf")),
        SubmissionError::MissingField("executiveCpf")
    );
    assert_eq!(
        SubmissionError::from(RegistrationError::malformed("eof")),
        SubmissionError::MalformedPayload("eof".into())
    );
}
