//! Built-in sample document

use crpt_core::{Document, Product};

/// Document submitted when no `--document` file is given
pub fn sample_document() -> Document {
    let product = Product {
        certificate_document: "cert_doc".to_string(),
        certificate_document_date: "2024-08-12".to_string(),
        certificate_document_number: "cert_num".to_string(),
        owner_inn: "owner_inn".to_string(),
        producer_inn: "producer_inn".to_string(),
        production_date: "2024-08-12".to_string(),
        tnved_code: "tnved_code".to_string(),
        uit_code: "uit_code".to_string(),
        uitu_code: "uitu_code".to_string(),
    };

    Document {
        doc_id: "doc_id".to_string(),
        doc_status: "doc_status".to_string(),
        doc_type: "LP_INTRODUCE_GOODS".to_string(),
        import_request: true,
        owner_inn: "owner_inn".to_string(),
        participant_inn: "participant_inn".to_string(),
        producer_inn: "producer_inn".to_string(),
        production_date: "2024-08-12".to_string(),
        production_type: "prod_type".to_string(),
        products: vec![product],
        reg_date: "2024-08-12".to_string(),
        reg_number: "reg_number".to_string(),
    }
}
