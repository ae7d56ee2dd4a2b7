// All prompt constants for the enhancement service.
// `{placeholder}` tokens are replaced by `request::EnhanceRequest::build_prompts`.

pub const SUMMARY_SYSTEM: &str = "Generate a compelling professional summary for a resume. \
The summary should be 2-4 sentences, highlight key strengths, and be written in first person implied (no \"I\" statements). \
Focus on value the person brings to employers. Be specific and avoid generic phrases.";

pub const SUMMARY_PROMPT_TEMPLATE: &str = "Generate a professional summary for:
Name: {name}
Current/Target Role: {position}
Key Skills: {skills}
Experience Level: {experience_count} position(s) listed

Write a compelling 2-4 sentence summary.";

pub const EXPERIENCE_SYSTEM: &str = "Improve the given work experience bullet points to be more impactful.
Use action verbs, quantify achievements when possible, and focus on impact and results.
Keep each bullet point concise (under 20 words ideally).
Return ONLY the improved bullet points, one per line, without numbers or bullet characters.";

pub const EXPERIENCE_PROMPT_TEMPLATE: &str = "Improve these experience bullet points for a {position} at {company}:

{bullets}

Return the improved version of each bullet point, one per line.";

pub const SKILLS_SYSTEM: &str = "You are a career advisor. Suggest relevant technical and soft skills for a resume.
Focus on skills that are in-demand and relevant to the job role.";

pub const SKILLS_OUTPUT_CONTRACT: &str = "with a \"skills\" array containing 5-8 skill strings.";

pub const SKILLS_PROMPT_TEMPLATE: &str = r#"Suggest skills for someone in the role of: {job_role}
They already have these skills: {existing_skills}

Suggest 5-8 additional relevant skills they should add. Return as JSON: {"skills": ["skill1", "skill2", ...]}"#;

pub const ANALYSIS_SYSTEM: &str = r#"You are an expert ATS (Applicant Tracking System) and resume consultant. Analyze the resume content and provide:
1. An ATS compatibility score from 0-100
2. 2-3 key strengths of the resume
3. 2-3 areas that need improvement
4. 2-3 specific, actionable suggestions

{json_only} with this structure:
{
  "score": number,
  "strengths": ["strength1", "strength2"],
  "weaknesses": ["weakness1", "weakness2"],
  "suggestions": ["suggestion1", "suggestion2"]
}

Scoring guidelines:
- 80-100: Excellent - well-structured, keyword-rich, quantified achievements
- 60-79: Good - solid content but room for improvement
- 40-59: Fair - missing key elements or poor formatting
- 0-39: Needs work - significant improvements needed"#;

pub const ANALYSIS_PROMPT_TEMPLATE: &str = "Analyze this resume for ATS compatibility and overall effectiveness:

Personal Info: {full_name}
Has Summary: {has_summary}
Experience Entries: {experience_count}
Education Entries: {education_count}
Skills Count: {skills_count}
Has Projects: {has_projects}

Full Resume Content:
{content}

Provide your analysis as JSON.";

pub const OPTIMIZE_SYSTEM: &str = r#"You are a resume optimization expert. Given a job description, optimize the resume content to better match the role.
Keep content truthful and professional. Focus on highlighting relevant experience and using matching keywords.
{json_only} with optimized content:
{
  "summary": "optimized professional summary",
  "skills": ["skill1", "skill2", ...]
}

The summary should be 2-4 sentences tailored to the job.
The skills should include relevant skills from the job description that the candidate could reasonably have."#;

pub const OPTIMIZE_PROMPT_TEMPLATE: &str = "Job Description:
{job_description}

Current Resume:
Summary: {current_summary}
Skills: {current_skills}
Experience: {current_experience}

Optimize the summary and suggest skills that align with this job description. Return as JSON.";
