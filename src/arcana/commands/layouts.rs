use crate::commands::CmdResult;
use crate::error::Result;
use crate::layout::LayoutRegistry;

pub fn run(registry: &LayoutRegistry) -> Result<CmdResult> {
    Ok(CmdResult::default().with_layouts(registry.templates().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_builtin_layouts() {
        let result = run(&LayoutRegistry::builtin()).unwrap();
        let names: Vec<_> = result.layouts.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["single", "timeline", "triangle", "choice"]);
    }
}
