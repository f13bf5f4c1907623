use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use base64::{engine::general_purpose, Engine as _};
use clap::Parser;
use colored::Colorize;

use shopwise_core::{AnalysisRequest, Config, ImageAttachment, ProductReport};
use shopwise_llm::ProductSearcher;

#[derive(Parser)]
#[command(name = "shopwise")]
#[command(about = "AI 購物比價助手：搜尋產品價格與 PTT/Dcard/Mobile01 論壇評價")]
#[command(version)]
struct Cli {
    /// Product name or question (e.g. "Sony XM5")
    query: Option<String>,

    /// Product photo to identify and analyze
    #[arg(long)]
    image: Option<PathBuf>,

    /// Extra model candidate, tried before the configured priority list
    #[arg(long)]
    model: Option<String>,
}

fn mime_for_extension(path: &Path) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let mime = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => bail!("不支援的圖片格式: {}", path.display()),
    };
    Ok(mime.to_string())
}

fn load_image(path: &Path) -> anyhow::Result<ImageAttachment> {
    let mime_type = mime_for_extension(path)?;
    let bytes =
        std::fs::read(path).with_context(|| format!("讀取圖片失敗: {}", path.display()))?;

    Ok(ImageAttachment {
        data: general_purpose::STANDARD.encode(bytes),
        mime_type,
    })
}

fn print_section(title: &str, body: &str) {
    println!("{}", format!("# {title}").bold());
    println!("{body}\n");
}

fn print_report(query: &str, report: &ProductReport) {
    println!(
        "\n{}\n",
        format!("=== {} ===", if query.is_empty() { "圖片搜尋結果" } else { query })
            .cyan()
            .bold()
    );

    print_section("產品概覽", &report.overview);

    print_section("價格分析", &report.price);

    println!("{}", "# 優點".bold());
    if report.pros.is_empty() {
        println!("{}", "（論壇上暫無明顯優點討論）".dimmed());
    }
    for pro in &report.pros {
        println!("  {} {}", "+".green().bold(), pro.green());
    }
    println!();

    println!("{}", "# 缺點".bold());
    if report.cons.is_empty() {
        println!("{}", "（論壇上暫無明顯抱怨）".dimmed());
    }
    for con in &report.cons {
        println!("  {} {}", "-".red().bold(), con.red());
    }
    println!();

    print_section("專家點評", &report.verdict);

    println!("{}", "參考來源".bold());
    if report.sources.is_empty() {
        println!("{}", "無直接來源，基於 AI 一般知識庫分析。".dimmed());
    }
    for (index, source) in report.sources.iter().enumerate() {
        let title = source.title.as_deref().unwrap_or("(未命名來源)");
        let uri = source.uri.as_deref().unwrap_or("");
        println!("  {}. {} {}", index + 1, title, uri.dimmed());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut request = AnalysisRequest::text(cli.query.unwrap_or_default());
    if let Some(path) = &cli.image {
        request = request.with_image(load_image(path)?);
    }

    let mut config = Config::new();
    if let Some(model) = cli.model {
        config.models.insert(0, model);
    }

    let searcher = ProductSearcher::from_config(&config);
    let query = request.query.clone();

    match searcher.search(&request).await {
        Ok(result) => {
            let report = ProductReport::from_analysis(&result);
            print_report(&query, &report);
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", "錯誤:".red().bold(), err.to_string().red());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_is_sniffed_from_extension() {
        assert_eq!(
            mime_for_extension(Path::new("cat.JPG")).unwrap(),
            "image/jpeg"
        );
        assert_eq!(
            mime_for_extension(Path::new("cat.webp")).unwrap(),
            "image/webp"
        );
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        assert!(mime_for_extension(Path::new("notes.txt")).is_err());
        assert!(mime_for_extension(Path::new("photo")).is_err());
    }

    #[test]
    fn load_image_encodes_file_as_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.jpg");
        std::fs::write(&path, b"ABC").unwrap();

        let image = load_image(&path).unwrap();
        assert_eq!(image.data, "QUJD");
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn load_image_missing_file_errors() {
        assert!(load_image(Path::new("/nonexistent/p.jpg")).is_err());
    }
}
