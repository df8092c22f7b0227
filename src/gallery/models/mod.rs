pub mod gallery_response;
