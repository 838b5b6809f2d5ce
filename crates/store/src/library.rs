//! In-memory library: books, users, and open loans.
//!
//! Books and users live in `BTreeMap`s keyed by id, so every listing comes
//! back in ascending id order. Open loans are keyed by book id, which makes
//! "at most one open loan per book" structural rather than checked.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{Book, LoanRequest, User};

/// Domain errors for library operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("user not found")]
    UserNotFound,

    #[error("book not found")]
    BookNotFound,

    #[error("book not available")]
    BookNotAvailable,

    #[error("book already loaned")]
    BookAlreadyLoaned,

    #[error("loan not found")]
    LoanNotFound,

    #[error("loan belongs to a different user")]
    LoanOwnerMismatch,

    #[error("book currently loaned")]
    BookOnLoan,

    #[error("user has active loans")]
    UserHasLoans,
}

/// The library state. Single-writer semantics are provided by the shared
/// `RwLock` wrapper; the struct itself is plain data.
#[derive(Debug, Default)]
pub struct Library {
    books: BTreeMap<String, Book>,
    users: BTreeMap<String, User>,
    /// Open loans, keyed by book id.
    loans: BTreeMap<String, LoanRequest>,
    /// Mutation journal, newest last.
    history: Vec<String>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a book. The store owns availability: a new book is always
    /// available, whatever the payload claimed.
    pub fn add_book(&mut self, mut book: Book) -> Book {
        book.available = true;
        self.history.push(format!("add_book:{}", book.id));
        self.books.insert(book.id.clone(), book.clone());
        book
    }

    /// All books in ascending id order.
    pub fn list_books(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    /// Case-insensitive substring search over title and author. An empty or
    /// whitespace-only query returns the full listing.
    pub fn search_books(&self, query: &str) -> Vec<Book> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.list_books();
        }
        self.books
            .values()
            .filter(|b| {
                b.title.to_lowercase().contains(&q) || b.author.to_lowercase().contains(&q)
            })
            .cloned()
            .collect()
    }

    pub fn add_user(&mut self, user: User) -> User {
        self.history.push(format!("add_user:{}", user.id));
        self.users.insert(user.id.clone(), user.clone());
        user
    }

    /// All users in ascending id order.
    pub fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Open a loan: the user and book must exist, and the book must not be
    /// out already.
    pub fn borrow(&mut self, req: LoanRequest) -> Result<(), LibraryError> {
        if !self.users.contains_key(&req.user_id) {
            return Err(LibraryError::UserNotFound);
        }
        let book = self
            .books
            .get_mut(&req.book_id)
            .ok_or(LibraryError::BookNotFound)?;
        if !book.available {
            return Err(LibraryError::BookNotAvailable);
        }
        if self.loans.contains_key(&req.book_id) {
            return Err(LibraryError::BookAlreadyLoaned);
        }
        book.available = false;
        self.history
            .push(format!("borrow:{}:{}", req.user_id, req.book_id));
        self.loans.insert(req.book_id.clone(), req);
        Ok(())
    }

    /// Close a loan. Only the borrowing user may return the book.
    pub fn return_book(&mut self, req: LoanRequest) -> Result<(), LibraryError> {
        let loan = self
            .loans
            .get(&req.book_id)
            .ok_or(LibraryError::LoanNotFound)?;
        if loan.user_id != req.user_id {
            return Err(LibraryError::LoanOwnerMismatch);
        }
        let book = self
            .books
            .get_mut(&req.book_id)
            .ok_or(LibraryError::BookNotFound)?;
        book.available = true;
        self.loans.remove(&req.book_id);
        self.history
            .push(format!("return:{}:{}", req.user_id, req.book_id));
        Ok(())
    }

    /// Delete a book. Refused while the book is out on loan.
    pub fn remove_book(&mut self, id: &str) -> Result<(), LibraryError> {
        if self.loans.contains_key(id) {
            return Err(LibraryError::BookOnLoan);
        }
        self.books.remove(id).ok_or(LibraryError::BookNotFound)?;
        self.history.push(format!("remove_book:{id}"));
        Ok(())
    }

    /// Delete a user. Refused while the user holds any open loan.
    pub fn remove_user(&mut self, id: &str) -> Result<(), LibraryError> {
        if self.loans.values().any(|loan| loan.user_id == id) {
            return Err(LibraryError::UserHasLoans);
        }
        self.users.remove(id).ok_or(LibraryError::UserNotFound)?;
        self.history.push(format!("remove_user:{id}"));
        Ok(())
    }

    /// Number of recorded mutations.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, author: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            isbn: None,
            available: false,
        }
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn loan(user_id: &str, book_id: &str) -> LoanRequest {
        LoanRequest {
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
        }
    }

    #[test]
    fn added_book_is_always_available() {
        let mut lib = Library::new();
        let created = lib.add_book(book("b1", "Dune", "Herbert"));
        assert!(created.available);
        assert!(lib.list_books()[0].available);
    }

    #[test]
    fn books_list_in_id_order() {
        let mut lib = Library::new();
        lib.add_book(book("b2", "Second", "A"));
        lib.add_book(book("b1", "First", "B"));
        lib.add_book(book("b3", "Third", "C"));
        let ids: Vec<_> = lib.list_books().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["b1", "b2", "b3"]);
    }

    #[test]
    fn borrow_return_flow() {
        let mut lib = Library::new();
        lib.add_user(user("u1", "Ana"));
        lib.add_book(book("b1", "Go", "Gopher"));

        lib.borrow(loan("u1", "b1")).unwrap();
        assert!(!lib.list_books()[0].available);

        // second borrow fails: the copy is out
        assert_eq!(
            lib.borrow(loan("u1", "b1")),
            Err(LibraryError::BookNotAvailable)
        );

        lib.return_book(loan("u1", "b1")).unwrap();
        assert!(lib.list_books()[0].available);

        // returning an available book fails
        assert_eq!(
            lib.return_book(loan("u1", "b1")),
            Err(LibraryError::LoanNotFound)
        );
    }

    #[test]
    fn borrow_requires_user_and_book() {
        let mut lib = Library::new();
        lib.add_book(book("b1", "Go", "Gopher"));
        assert_eq!(
            lib.borrow(loan("missing", "b1")),
            Err(LibraryError::UserNotFound)
        );

        lib.add_user(user("u1", "Ana"));
        assert_eq!(
            lib.borrow(loan("u1", "missing")),
            Err(LibraryError::BookNotFound)
        );
    }

    #[test]
    fn return_checks_loan_owner() {
        let mut lib = Library::new();
        lib.add_user(user("u1", "Ana"));
        lib.add_user(user("u2", "Bea"));
        lib.add_book(book("b1", "Go", "Gopher"));
        lib.borrow(loan("u1", "b1")).unwrap();
        assert_eq!(
            lib.return_book(loan("u2", "b1")),
            Err(LibraryError::LoanOwnerMismatch)
        );
    }

    #[test]
    fn remove_book_constraints() {
        let mut lib = Library::new();
        lib.add_user(user("u1", "Ana"));
        lib.add_book(book("b1", "Go", "Gopher"));

        assert_eq!(lib.remove_book("missing"), Err(LibraryError::BookNotFound));

        lib.borrow(loan("u1", "b1")).unwrap();
        assert_eq!(lib.remove_book("b1"), Err(LibraryError::BookOnLoan));

        lib.return_book(loan("u1", "b1")).unwrap();
        lib.remove_book("b1").unwrap();
        assert!(lib.list_books().is_empty());
    }

    #[test]
    fn remove_user_constraints() {
        let mut lib = Library::new();
        lib.add_user(user("u1", "Ana"));
        lib.add_book(book("b1", "Go", "Gopher"));

        assert_eq!(lib.remove_user("missing"), Err(LibraryError::UserNotFound));

        lib.borrow(loan("u1", "b1")).unwrap();
        assert_eq!(lib.remove_user("u1"), Err(LibraryError::UserHasLoans));

        lib.return_book(loan("u1", "b1")).unwrap();
        lib.remove_user("u1").unwrap();
        assert!(lib.list_users().is_empty());
    }

    #[test]
    fn search_matches_title_and_author_case_insensitively() {
        let mut lib = Library::new();
        lib.add_book(book("b1", "Go Programming", "Gopher"));
        lib.add_book(book("b2", "Rust Essentials", "Ferris"));

        let results = lib.search_books("go");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "b1");

        let results = lib.search_books("FERRIS");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "b2");
    }

    #[test]
    fn empty_search_is_the_full_listing() {
        let mut lib = Library::new();
        lib.add_book(book("b1", "Go Programming", "Gopher"));
        lib.add_book(book("b2", "Rust Essentials", "Ferris"));
        assert_eq!(lib.search_books(""), lib.list_books());
        assert_eq!(lib.search_books("   "), lib.list_books());
    }

    #[test]
    fn history_records_mutations() {
        let mut lib = Library::new();
        lib.add_user(user("u1", "Ana"));
        lib.add_book(book("b1", "Go", "Gopher"));
        lib.borrow(loan("u1", "b1")).unwrap();
        lib.return_book(loan("u1", "b1")).unwrap();
        lib.remove_book("b1").unwrap();
        assert_eq!(lib.history_len(), 5);
    }
}
