pub mod concurrency_tests;
