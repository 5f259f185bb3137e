mod encoding;
mod faq;
mod headers;
mod sections;
