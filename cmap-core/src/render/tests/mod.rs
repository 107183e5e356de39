mod document_tests;
mod test_helpers;
