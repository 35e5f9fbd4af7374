pub mod chapter_server;
