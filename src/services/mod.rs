pub mod issue_service;
