//! # Customer and Supplier Records
//!
//! JSON bodies exchanged with the registry backend and the submit-time
//! checks the customer and supplier forms run before sending them.
//!
//! Field names follow the backend's camelCase wire format. Validation
//! messages are the Portuguese strings shown next to each form field, keyed
//! by the wire name of the offending field.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::document::{format_document, validate_document};
use crate::error::CaixaError;
use crate::phone::{format_phone, validate_phone};

/// Maximum address length accepted by the customer form.
pub const ADDRESS_MAX_CHARS: usize = 255;

/// Minimum length of a non-blank customer address.
pub const ADDRESS_MIN_CHARS: usize = 3;

/// Categories offered by the supplier form.
pub const SUPPLIER_CATEGORIES: [&str; 8] = [
    "Tecnologia",
    "Materiais",
    "Serviços",
    "Logística",
    "Consultoria",
    "Equipamentos",
    "Manutenção",
    "Outros",
];

/// Registry status of a customer or supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Active.
    #[default]
    Ativo,
    /// Inactive.
    Inativo,
}

/// Customer as exchanged with `GET/POST/PUT /customers`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    /// Backend identifier; empty for a record not yet created.
    #[serde(default)]
    pub id_customers: String,
    #[serde(default)]
    pub name: String,
    /// CPF or CNPJ, usually masked.
    #[serde(default)]
    pub cpf_cnpj: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, alias = "category")]
    pub categoria: String,
    #[serde(default)]
    pub id_company: i64,
    #[serde(default, alias = "isSupplier")]
    pub supplier: bool,
    /// Lifetime purchases in reais, as the backend sends it.
    #[serde(default)]
    pub total_compras: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_ultima_compra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Supplier as exchanged with the supplier endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub total_compras: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_ultima_compra: Option<String>,
}

/// Field-level validation messages keyed by wire field name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// No errors recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// The forms' email rule: some non-space text, `@`, non-space text
/// containing a `.` that has non-space text on both sides.
pub fn looks_like_email(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    chars.iter().enumerate().any(|(i, c)| {
        if *c != '@' || i == 0 || chars[i - 1].is_whitespace() {
            return false;
        }
        let domain: Vec<char> = chars[i + 1..]
            .iter()
            .copied()
            .take_while(|c| !c.is_whitespace())
            .collect();
        domain.len() >= 3 && domain[1..domain.len() - 1].contains(&'.')
    })
}

// Arrays are tried first: a record whose fields all default would
// otherwise accept `[]` as a one-element batch.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Parse a JSON document holding one record object or an array of them.
///
/// # Errors
///
/// Returns [`CaixaError::Json`] when the document is neither shape.
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, CaixaError> {
    Ok(match serde_json::from_str::<OneOrMany<T>>(json)? {
        OneOrMany::One(record) => vec![record],
        OneOrMany::Many(records) => records,
    })
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn check_email(errors: &mut FieldErrors, field: &str, email: &str) {
    if is_blank(email) {
        errors.insert(field, "Email é obrigatório");
    } else if !looks_like_email(email) {
        errors.insert(field, "Email inválido");
    }
}

impl CustomerRecord {
    /// Run the customer form's submit checks.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.name) {
            errors.insert("name", "Nome é obrigatório");
        }

        if is_blank(&self.cpf_cnpj) {
            errors.insert("cpfCnpj", "CPF ou CNPJ é obrigatório");
        } else if !validate_document(&self.cpf_cnpj) {
            errors.insert("cpfCnpj", "CPF ou CNPJ inválido");
        }

        check_email(&mut errors, "email", &self.email);

        if is_blank(&self.phone) {
            errors.insert("phone", "Telefone é obrigatório");
        } else if !validate_phone(&self.phone) {
            errors.insert("phone", "Telefone inválido");
        }

        if let Some(address) = &self.address {
            let len = address.chars().count();
            if (!is_blank(address) && len < ADDRESS_MIN_CHARS) || len > ADDRESS_MAX_CHARS {
                errors.insert(
                    "address",
                    "Endereço deve ter no mínimo 3 caracteres e no máximo 255 caracteres",
                );
            }
        }

        tracing::debug!(customer = %self.name, failures = errors.len(), "validated customer record");
        errors.into_result()
    }

    /// Copy with `cpfCnpj` and `phone` re-masked for display.
    pub fn normalized(&self) -> Self {
        Self {
            cpf_cnpj: format_document(&self.cpf_cnpj),
            phone: format_phone(&self.phone),
            ..self.clone()
        }
    }
}

impl SupplierRecord {
    /// Run the supplier form's submit checks. Only presence and email
    /// shape are enforced; the CNPJ and phone are masked but not
    /// length-checked on this form.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.nome) {
            errors.insert("nome", "Nome é obrigatório");
        }
        check_email(&mut errors, "email", &self.email);
        if is_blank(&self.telefone) {
            errors.insert("telefone", "Telefone é obrigatório");
        }
        if is_blank(&self.endereco) {
            errors.insert("endereco", "Endereço é obrigatório");
        }
        if is_blank(&self.cnpj) {
            errors.insert("cnpj", "CNPJ é obrigatório");
        }
        if is_blank(&self.categoria) {
            errors.insert("categoria", "Categoria é obrigatória");
        }

        tracing::debug!(supplier = %self.nome, failures = errors.len(), "validated supplier record");
        errors.into_result()
    }

    /// Copy with `cnpj` and `telefone` re-masked for display.
    pub fn normalized(&self) -> Self {
        Self {
            cnpj: format_document(&self.cnpj),
            telefone: format_phone(&self.telefone),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerRecord {
        CustomerRecord {
            name: "Maria Souza".into(),
            cpf_cnpj: "123.456.789-01".into(),
            email: "maria@example.com".into(),
            phone: "(11) 99999-9999".into(),
            ..Default::default()
        }
    }

    fn supplier() -> SupplierRecord {
        SupplierRecord {
            nome: "Acme Ltda".into(),
            email: "compras@acme.com.br".into(),
            telefone: "1133333333".into(),
            endereco: "Rua A, 100".into(),
            cnpj: "12345678000195".into(),
            categoria: "Materiais".into(),
            ..Default::default()
        }
    }

    // -- email rule --

    #[test]
    fn email_rule() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("maria@example.com"));
        assert!(looks_like_email("x a@b.c y"));
        assert!(!looks_like_email("maria"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a @b.c"));
        assert!(!looks_like_email("a@b .c"));
    }

    // -- customer --

    #[test]
    fn valid_customer_passes() {
        assert!(customer().validate().is_ok());
    }

    #[test]
    fn blank_customer_reports_required_fields() {
        let errors = CustomerRecord::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Nome é obrigatório"));
        assert_eq!(errors.get("cpfCnpj"), Some("CPF ou CNPJ é obrigatório"));
        assert_eq!(errors.get("email"), Some("Email é obrigatório"));
        assert_eq!(errors.get("phone"), Some("Telefone é obrigatório"));
        assert_eq!(errors.get("address"), None);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn customer_rejects_partial_document_and_phone() {
        let mut c = customer();
        c.cpf_cnpj = "123.456".into();
        c.phone = "(11) 9999".into();
        c.email = "maria".into();
        let errors = c.validate().unwrap_err();
        assert_eq!(errors.get("cpfCnpj"), Some("CPF ou CNPJ inválido"));
        assert_eq!(errors.get("phone"), Some("Telefone inválido"));
        assert_eq!(errors.get("email"), Some("Email inválido"));
    }

    #[test]
    fn customer_accepts_cnpj() {
        let mut c = customer();
        c.cpf_cnpj = "12.345.678/0001-95".into();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn customer_address_bounds() {
        let mut c = customer();
        c.address = Some("   ".into());
        assert!(c.validate().is_ok());
        c.address = Some("ab".into());
        assert!(c.validate().unwrap_err().get("address").is_some());
        c.address = Some("Rua".into());
        assert!(c.validate().is_ok());
        c.address = Some("x".repeat(256));
        assert!(c.validate().unwrap_err().get("address").is_some());
        c.address = Some("é".repeat(255));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn customer_normalized_masks_fields() {
        let mut c = customer();
        c.cpf_cnpj = "12345678000195".into();
        c.phone = "1133333333".into();
        let n = c.normalized();
        assert_eq!(n.cpf_cnpj, "12.345.678/0001-95");
        assert_eq!(n.phone, "(11) 3333-3333");
        assert_eq!(n.name, c.name);
    }

    #[test]
    fn customer_wire_format() {
        let json = r#"{
            "idCustomers": "c-1",
            "name": "Maria",
            "cpfCnpj": "12345678901",
            "email": "maria@example.com",
            "phone": "11999999999",
            "status": "Inativo",
            "category": "Varejo",
            "idCompany": 7,
            "isSupplier": false,
            "totalCompras": 1500.5,
            "dataUltimaCompra": "2024-01-15"
        }"#;
        let c: CustomerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(c.id_customers, "c-1");
        assert_eq!(c.status, Status::Inativo);
        assert_eq!(c.categoria, "Varejo");
        assert_eq!(c.id_company, 7);
        assert_eq!(c.data_ultima_compra.as_deref(), Some("2024-01-15"));
        assert_eq!(c.address, None);

        let out = serde_json::to_value(&c).unwrap();
        assert_eq!(out["cpfCnpj"], "12345678901");
        assert_eq!(out["status"], "Inativo");
        assert!(out.get("address").is_none());
    }

    // -- supplier --

    #[test]
    fn valid_supplier_passes() {
        assert!(supplier().validate().is_ok());
    }

    #[test]
    fn blank_supplier_reports_required_fields() {
        let errors = SupplierRecord::default().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("categoria"), Some("Categoria é obrigatória"));
        assert_eq!(errors.get("cnpj"), Some("CNPJ é obrigatório"));
    }

    #[test]
    fn supplier_does_not_length_check_cnpj() {
        let mut s = supplier();
        s.cnpj = "123".into();
        assert!(s.validate().is_ok());
    }

    #[test]
    fn supplier_normalized_masks_fields() {
        let n = supplier().normalized();
        assert_eq!(n.cnpj, "12.345.678/0001-95");
        assert_eq!(n.telefone, "(11) 3333-3333");
    }

    #[test]
    fn categories_are_known() {
        assert!(SUPPLIER_CATEGORIES.contains(&supplier().categoria.as_str()));
    }

    // -- parse_records --

    #[test]
    fn parse_single_and_array() {
        let one: Vec<SupplierRecord> = parse_records(
            r#"{"nome": "A", "email": "a@b.c", "telefone": "1", "endereco": "R", "cnpj": "1", "categoria": "Outros"}"#,
        )
        .unwrap();
        assert_eq!(one.len(), 1);

        let many: Vec<CustomerRecord> = parse_records(
            r#"[{"name": "A", "email": "", "phone": ""}, {"name": "B", "email": "", "phone": ""}]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].name, "B");
    }

    #[test]
    fn parse_rejects_other_shapes() {
        let err = parse_records::<CustomerRecord>("42").unwrap_err();
        assert!(matches!(err, CaixaError::Json(_)));
        assert!(parse_records::<CustomerRecord>(r#"{"name": 5}"#).is_err());
    }

    #[test]
    fn parse_empty_array_is_empty_batch() {
        let none: Vec<CustomerRecord> = parse_records("[]").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn draft_customer_parses_and_reports_missing_fields() {
        let drafts: Vec<CustomerRecord> = parse_records(r#"{"name": "A"}"#).unwrap();
        let errors = drafts[0].validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email é obrigatório"));
        assert_eq!(errors.get("phone"), Some("Telefone é obrigatório"));
        assert_eq!(errors.get("cpfCnpj"), Some("CPF ou CNPJ é obrigatório"));
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn draft_supplier_parses_and_reports_missing_fields() {
        let drafts: Vec<SupplierRecord> = parse_records(r#"{"nome": "Acme"}"#).unwrap();
        let errors = drafts[0].validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("telefone"), Some("Telefone é obrigatório"));
        assert_eq!(errors.get("endereco"), Some("Endereço é obrigatório"));
    }

    // -- FieldErrors --

    #[test]
    fn field_errors_display_and_serialize() {
        let mut errors = FieldErrors::new();
        errors.insert("phone", "Telefone inválido");
        errors.insert("email", "Email inválido");
        assert_eq!(errors.to_string(), "email: Email inválido; phone: Telefone inválido");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["phone"], "Telefone inválido");
    }
}
