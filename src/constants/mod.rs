pub mod form_prompt;
