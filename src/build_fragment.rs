use std::fmt::Write;

/// A struct to render the ready-to-paste Bazel `cc_library` fragment for the
/// vendored sources
pub struct BuildFragment {
    lib_name: String,
    srcs: Vec<String>,
}

// The vendored library always links against jsoncpp, libcurl and
// libmicrohttpd; these are properties of the upstream code, not options.
const DEP: &str = ":jsoncpp";
const LINKOPTS: [&str; 2] = ["-lcurl", "-lmicrohttpd"];

impl BuildFragment {
    /// Create a fragment for a library target with the given name and sources
    pub fn new<S: Into<String>>(lib_name: S, srcs: Vec<String>) -> Self {
        BuildFragment {
            lib_name: lib_name.into(),
            srcs,
        }
    }

    /// Render the fragment, banner included. An empty source list renders a
    /// target with an empty `srcs` block.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("#==============================================\n");
        out.push_str("#   Include the following into the BUILD file\n");
        out.push_str("#==============================================\n");
        out.push('\n');
        let _ = writeln!(out, "cc_library(name = \"{}\",", self.lib_name);
        out.push_str("           srcs = [\n");
        for src in &self.srcs {
            let _ = writeln!(out, "               \"{}\",", src);
        }
        out.push_str("           ],\n");
        let _ = writeln!(out, "           deps = [\"{}\"],", DEP);
        let _ = writeln!(
            out,
            "           linkopts = [\"{}\", \"{}\"],",
            LINKOPTS[0], LINKOPTS[1]
        );
        out.push_str("           visibility = [\"//visibility:public\"])\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_sources() {
        let fragment = BuildFragment::new(
            "jsonrpc",
            vec!["client_client.h".to_string(), "common_errors.cpp".to_string()],
        );
        let text = fragment.render();

        assert!(text.starts_with("#=============================================="));
        assert!(text.contains("cc_library(name = \"jsonrpc\",\n"));
        assert!(text.contains("               \"client_client.h\",\n"));
        assert!(text.contains("               \"common_errors.cpp\",\n"));
        assert!(text.contains("           deps = [\":jsoncpp\"],\n"));
        assert!(text.contains("           linkopts = [\"-lcurl\", \"-lmicrohttpd\"],\n"));
        assert!(text.ends_with("           visibility = [\"//visibility:public\"])\n"));
    }

    #[test]
    fn test_render_empty_source_list() {
        let fragment = BuildFragment::new("jsonrpc", Vec::new());
        let text = fragment.render();

        assert!(text.contains("           srcs = [\n           ],\n"));
    }
}
