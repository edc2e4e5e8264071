//! Jenkins REST endpoint paths.
//!
//! Every path is relative to the server root and never starts with `/`.

/// Name-only job query, used for existence checks.
pub fn job_name(job_name: &str) -> String {
    format!("job/{}/api/json?tree=name", job_name)
}

/// Full job metadata at the given expansion depth.
pub fn job_info(job_name: &str, depth: u32) -> String {
    format!("job/{}/api/json?depth={}", job_name, depth)
}

/// Metadata for one build of a job.
pub fn build_info(job_name: &str, number: u64, depth: u32) -> String {
    format!("job/{}/{}/api/json?depth={}", job_name, number, depth)
}

/// Trigger a build without parameters.
pub fn build_job(job_name: &str) -> String {
    format!("job/{}/build", job_name)
}

/// Trigger a parameterized build.
///
/// Parameters are form-encoded into the query string in the order given.
pub fn build_with_params(job_name: &str, params: &[(&str, &str)]) -> String {
    format!(
        "job/{}/buildWithParameters?{}",
        job_name,
        encode_params(params)
    )
}

fn encode_params(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
