//! Form submission controller.
//!
//! Each submission follows the same path: collect the named fields, add the
//! action discriminator, show an in-progress status, call the gateway, then
//! show success or failure. The caller decides what to re-render from the
//! returned [`Submission`].

use std::sync::Arc;

use crate::models::{
    Action, FormFields, StatusPanel, StatusSink, StatusTone, WriteOutcome,
};

use super::gateway::DataGateway;

/// Checkbox group holding the codes to return
pub const RETURN_BOOKS_FIELD: &str = "booksToReturn[]";
pub const RETURN_MEMBER_FIELD: &str = "memberIDReturn";
/// Hidden field naming the book under edit; blank when creating
pub const EDITING_FIELD: &str = "editingKode";

const CONNECTION_ERROR: &str = "Error koneksi server. Cek URL Apps Script atau jaringan.";

/// What the page should do after a submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    /// Clear the form fields
    pub reset_form: bool,
    /// Re-fetch the listing the form modifies
    pub refresh_listing: bool,
    /// Backend answer; `None` when rejected before any request
    pub outcome: Option<WriteOutcome>,
}

impl Submission {
    fn rejected() -> Self {
        Self::default()
    }

    fn sent(outcome: WriteOutcome, refresh_listing: bool) -> Self {
        Self {
            reset_form: outcome.success,
            refresh_listing: refresh_listing && outcome.success,
            outcome: Some(outcome),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome.as_ref().map(|o| o.success).unwrap_or(false)
    }
}

/// Messages for one kind of single-region form
struct Wording {
    processing: &'static str,
    succeeded: &'static str,
    failed: &'static str,
}

const BORROW: Wording = Wording {
    processing: "Memproses peminjaman...",
    succeeded: "Peminjaman berhasil dicatat.",
    failed: "Gagal mencatat peminjaman. Respon Apps Script tidak sukses.",
};

const SAVE_BOOK: Wording = Wording {
    processing: "Menyimpan data buku...",
    succeeded: "Data buku berhasil disimpan.",
    failed: "Gagal menyimpan data buku. Respon Apps Script tidak sukses.",
};

const DELETE_BOOK: Wording = Wording {
    processing: "Menghapus buku...",
    succeeded: "Buku berhasil dihapus.",
    failed: "Gagal menghapus buku. Respon Apps Script tidak sukses.",
};

#[derive(Clone)]
pub struct FormController {
    gateway: Arc<dyn DataGateway>,
}

impl FormController {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Borrow form: every field goes through with `addBorrow`.
    pub async fn submit_borrow(&self, fields: &FormFields, status: &mut dyn StatusSink) -> Submission {
        let payload = fields.to_payload(Action::AddBorrow);
        let outcome = self.send(payload, &BORROW, status).await;
        Submission::sent(outcome, false)
    }

    /// Return form: the checked codes are required; an empty selection is
    /// rejected without contacting the backend.
    pub async fn submit_return(&self, fields: &FormFields, status: &mut dyn StatusSink) -> Submission {
        status.show(StatusPanel::headed(
            StatusTone::Info,
            "Memproses Pengembalian...",
            "Mohon tunggu...",
        ));

        let books = fields.get_all(RETURN_BOOKS_FIELD);
        if books.is_empty() {
            status.show(StatusPanel::headed(
                StatusTone::Warning,
                "Peringatan",
                "Pilih minimal satu buku untuk dikembalikan.",
            ));
            return Submission::rejected();
        }

        let mut payload = serde_json::Map::new();
        payload.insert("action".into(), Action::ProcessReturn.as_str().into());
        payload.insert(
            "memberID".into(),
            fields.get(RETURN_MEMBER_FIELD).unwrap_or_default().trim().into(),
        );
        payload.insert(
            "books".into(),
            books.into_iter().map(serde_json::Value::from).collect(),
        );

        let outcome = self.gateway.send_data(payload).await;
        let panel = if outcome.connection_failed {
            StatusPanel::headed(
                StatusTone::Danger,
                "Error Koneksi!",
                "Error koneksi server saat pengembalian. Cek URL atau jaringan Anda.",
            )
        } else if outcome.success {
            StatusPanel::headed(
                StatusTone::Success,
                "Pengembalian Berhasil!",
                outcome.message().unwrap_or("Buku berhasil dikembalikan."),
            )
            .with_fee(outcome.denda.unwrap_or_default())
        } else {
            StatusPanel::headed(
                StatusTone::Danger,
                "Pengembalian Gagal!",
                outcome
                    .message()
                    .unwrap_or("Gagal memproses pengembalian. Respon Apps Script tidak sukses."),
            )
        };
        status.show(panel);

        Submission::sent(outcome, true)
    }

    /// Admin add/edit form. A non-blank `editingKode` selects `editBook` and
    /// pins `kode` to the book under edit.
    pub async fn submit_book(&self, fields: &FormFields, status: &mut dyn StatusSink) -> Submission {
        let mut fields = fields.clone();
        let editing = fields.non_empty(EDITING_FIELD).map(str::to_string);
        fields.remove(EDITING_FIELD);

        let action = match editing {
            Some(code) => {
                fields.set("kode", code);
                Action::EditBook
            }
            None => Action::AddBook,
        };

        let outcome = self.send(fields.to_payload(action), &SAVE_BOOK, status).await;
        Submission::sent(outcome, true)
    }

    /// Delete the book keyed by `code`.
    pub async fn submit_delete(&self, code: &str, status: &mut dyn StatusSink) -> Submission {
        let fields = FormFields::from_pairs([("kode", code.trim())]);
        let outcome = self
            .send(fields.to_payload(Action::DeleteBook), &DELETE_BOOK, status)
            .await;
        Submission::sent(outcome, true)
    }

    async fn send(
        &self,
        payload: serde_json::Map<String, serde_json::Value>,
        wording: &Wording,
        status: &mut dyn StatusSink,
    ) -> WriteOutcome {
        status.show(StatusPanel::new(StatusTone::Info, wording.processing));

        let outcome = self.gateway.send_data(payload).await;
        let panel = if outcome.connection_failed {
            StatusPanel::new(StatusTone::Danger, CONNECTION_ERROR)
        } else if outcome.success {
            StatusPanel::new(
                StatusTone::Success,
                outcome.message().unwrap_or(wording.succeeded),
            )
        } else {
            StatusPanel::new(StatusTone::Danger, outcome.message().unwrap_or(wording.failed))
        };
        status.show(panel);

        outcome
    }
}
