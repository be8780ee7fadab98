mod sanitize_filename;
mod upload_url;
