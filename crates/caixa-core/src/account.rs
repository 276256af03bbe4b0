//! # Payable and Receivable Entries
//!
//! Bills to pay (`contas a pagar`) and amounts to collect (`contas a
//! receber`), with the submit-time checks of the two finance forms.
//!
//! `valor` is held in integer centavos, like every other amount in the
//! crate; use [`crate::display::parse_amount`] to read one typed by a
//! user and [`crate::display::format_currency`] to render it.

use serde::{Deserialize, Serialize};

use crate::record::{is_blank, FieldErrors};

/// Categories offered by the payable form.
pub const PAYABLE_CATEGORIES: [&str; 9] = [
    "Infraestrutura",
    "Utilidades",
    "Materiais",
    "Serviços",
    "Consultoria",
    "Equipamentos",
    "Manutenção",
    "Marketing",
    "Outros",
];

/// Categories offered by the receivable form.
pub const RECEIVABLE_CATEGORIES: [&str; 9] = [
    "Serviços",
    "Projetos",
    "Consultoria",
    "Licenças",
    "Produtos",
    "Assinaturas",
    "Treinamentos",
    "Suporte",
    "Outros",
];

/// Settlement state of a payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PayableStatus {
    #[default]
    Pendente,
    Pago,
    Vencido,
}

/// Settlement state of a receivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReceivableStatus {
    #[default]
    Pendente,
    Recebido,
    Vencido,
}

/// A bill owed to a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayableRecord {
    pub id: String,
    pub descricao: String,
    /// Amount in centavos.
    pub valor: i64,
    /// Due date, `YYYY-MM-DD`.
    pub data_vencimento: String,
    pub categoria: String,
    pub fornecedor: String,
    pub status: PayableStatus,
    pub recorrente: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

/// An amount a customer owes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceivableRecord {
    pub id: String,
    pub descricao: String,
    /// Amount in centavos.
    pub valor: i64,
    /// Due date, `YYYY-MM-DD`.
    pub data_vencimento: String,
    pub categoria: String,
    pub cliente: String,
    pub status: ReceivableStatus,
    pub recorrente: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

// Checks shared by both forms. Only `descricao` is trimmed; the other
// fields come from pickers and are checked for presence alone.
fn check_entry(
    errors: &mut FieldErrors,
    descricao: &str,
    valor: i64,
    vencimento: &str,
    categoria: &str,
) {
    if is_blank(descricao) {
        errors.insert("descricao", "Descrição é obrigatória");
    }
    if valor <= 0 {
        errors.insert("valor", "Valor deve ser maior que zero");
    }
    if vencimento.is_empty() {
        errors.insert("dataVencimento", "Data de vencimento é obrigatória");
    }
    if categoria.is_empty() {
        errors.insert("categoria", "Categoria é obrigatória");
    }
}

impl PayableRecord {
    /// Run the payable form's submit checks.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_entry(
            &mut errors,
            &self.descricao,
            self.valor,
            &self.data_vencimento,
            &self.categoria,
        );
        if self.fornecedor.is_empty() {
            errors.insert("fornecedor", "Fornecedor é obrigatório");
        }

        tracing::debug!(payable = %self.descricao, failures = errors.len(), "validated payable record");
        errors.into_result()
    }
}

impl ReceivableRecord {
    /// Run the receivable form's submit checks.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_entry(
            &mut errors,
            &self.descricao,
            self.valor,
            &self.data_vencimento,
            &self.categoria,
        );
        if self.cliente.is_empty() {
            errors.insert("cliente", "Cliente é obrigatório");
        }

        tracing::debug!(receivable = %self.descricao, failures = errors.len(), "validated receivable record");
        errors.into_result()
    }
}
