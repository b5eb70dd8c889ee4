use std::sync::OnceLock;
use tera::Tera;

static TERA: OnceLock<Tera> = OnceLock::new();

pub fn get_tera() -> &'static Tera {
    TERA.get_or_init(|| {
        let mut tera = Tera::default();
        let template_dir = std::path::Path::new("templates");
        if let Ok(dir) = std::fs::read_dir(template_dir) {
            let files: Vec<_> = dir
                .filter_map(Result::ok)
                .filter(|e| e.path().extension().map_or(false, |ext| ext == "html"))
                .filter_map(|e| {
                    let name = e.path().file_name()?.to_str()?.to_string();
                    Some((e.path(), Some(name)))
                })
                .collect();
            tera.add_template_files(files)
                .expect("Failed to load templates");
        }
        tera
    })
}
