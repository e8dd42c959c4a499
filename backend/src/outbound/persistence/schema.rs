//! Diesel table definitions mirroring the SQL migrations.

diesel::table! {
    /// Registered accounts. `email` carries a unique index.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        password_hash -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// The shared flashcard deck.
    flashcards (id) {
        id -> Int8,
        word -> Varchar,
        translation -> Text,
        /// `en_to_pt` or `pt_to_en`, enforced by a check constraint.
        direction -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, flashcards);
