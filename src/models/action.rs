//! Operation discriminators understood by the backend

/// Value of the `action` query parameter (reads) or body field (writes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GetStats,
    GetBooks,
    GetBooksAdmin,
    AddBorrow,
    ProcessReturn,
    AddBook,
    EditBook,
    DeleteBook,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetStats => "getStats",
            Action::GetBooks => "getBooks",
            Action::GetBooksAdmin => "getBooksAdmin",
            Action::AddBorrow => "addBorrow",
            Action::ProcessReturn => "processReturn",
            Action::AddBook => "addBook",
            Action::EditBook => "editBook",
            Action::DeleteBook => "deleteBook",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
