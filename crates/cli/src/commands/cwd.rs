use pathnorm_core::PathNormalizer;

pub fn cwd_command(normalizer: &PathNormalizer) -> String {
    normalizer.working_directory().to_string()
}
