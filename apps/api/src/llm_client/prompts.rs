// Shared prompt fragments.
// Each service that needs AI calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Persona opening the prompts that rewrite resume text.
pub const RESUME_WRITER_PERSONA: &str = "You are a professional resume writer.";

/// Instruction closing every prompt whose answer is parsed as JSON.
pub const JSON_OBJECT_ONLY: &str = "Return ONLY a JSON object";
