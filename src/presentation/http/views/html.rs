use super::{View, ViewError, ViewRenderer};
use crate::application::dto::{ArticleDto, ArticleForm};
use crate::domain::errors::ValidationErrors;
use std::fmt::{self, Write};

/// Renders complete HTML pages. All user-supplied text is escaped.
#[derive(Debug, Clone)]
pub struct HtmlViewRenderer {
    site_title: String,
}

impl HtmlViewRenderer {
    pub fn new(site_title: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
        }
    }

    fn page_title<'a>(&'a self, view: &'a View) -> &'a str {
        match view {
            View::Index { .. } => self.site_title.as_str(),
            View::New { .. } => "New Article",
            View::Edit { .. } => "Edit Article",
            View::Show { article, .. } => article.title.as_str(),
            View::Delete { .. } => "Delete Article",
        }
    }

    fn write_page(&self, out: &mut String, view: &View) -> fmt::Result {
        let title = self.page_title(view);
        write!(
            out,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
            escape(title)
        )?;
        write!(
            out,
            "<header><a href=\"/articles\">{}</a></header>\n<main>\n",
            escape(&self.site_title)
        )?;

        match view {
            View::Index {
                articles,
                logged_in,
            } => write_index(out, title, articles, *logged_in)?,
            View::New { form, errors } => {
                write_form(out, title, "/articles", "Create Article", form, errors)?
            }
            View::Edit { id, form, errors } => {
                let action = format!("/articles/{id}/edit");
                write_form(out, title, &action, "Update Article", form, errors)?
            }
            View::Show { article, logged_in } => write_show(out, article, *logged_in)?,
            View::Delete { article } => write_delete(out, title, article)?,
        }

        out.write_str("</main>\n</body>\n</html>\n")
    }
}

impl ViewRenderer for HtmlViewRenderer {
    fn render(&self, view: &View) -> Result<String, ViewError> {
        let mut out = String::new();
        self.write_page(&mut out, view)
            .map_err(|source| ViewError::Format {
                template: view.template_name(),
                source,
            })?;
        Ok(out)
    }
}

fn write_index(
    out: &mut String,
    title: &str,
    articles: &[ArticleDto],
    logged_in: bool,
) -> fmt::Result {
    writeln!(out, "<h1>{}</h1>", escape(title))?;
    if logged_in {
        out.write_str("<p><a class=\"button\" href=\"/articles/new\">New Article</a></p>\n")?;
    }
    if articles.is_empty() {
        return out.write_str("<p>No articles yet.</p>\n");
    }
    for article in articles {
        writeln!(
            out,
            "<article>\n<h2><a href=\"/articles/{}\">{}</a></h2>\n<p>by {} on {}</p>\n</article>",
            article.id,
            escape(&article.title),
            escape(&article.author),
            article.created_at.format("%B %-d, %Y"),
        )?;
    }
    Ok(())
}

fn write_errors(out: &mut String, errors: &ValidationErrors) -> fmt::Result {
    if errors.is_empty() {
        return Ok(());
    }
    out.write_str("<div class=\"errors\">\n<h2>Oops!</h2>\n<ul>\n")?;
    for err in errors.iter() {
        writeln!(
            out,
            "<li data-field=\"{}\">{}</li>",
            err.field,
            escape(&err.message)
        )?;
    }
    out.write_str("</ul>\n</div>\n")
}

fn write_form(
    out: &mut String,
    title: &str,
    action: &str,
    submit: &str,
    form: &ArticleForm,
    errors: &ValidationErrors,
) -> fmt::Result {
    writeln!(out, "<h1>{}</h1>", escape(title))?;
    write_errors(out, errors)?;
    writeln!(out, "<form method=\"post\" action=\"{}\">", escape(action))?;
    writeln!(
        out,
        "<p><label for=\"title\">Title</label>\n<input id=\"title\" name=\"title\" type=\"text\" value=\"{}\"></p>",
        escape(&form.title)
    )?;
    writeln!(
        out,
        "<p><label for=\"author\">Author</label>\n<input id=\"author\" name=\"author\" type=\"text\" value=\"{}\"></p>",
        escape(&form.author)
    )?;
    writeln!(
        out,
        "<p><label for=\"content\">Body</label>\n<textarea id=\"content\" name=\"content\">{}</textarea></p>",
        escape(&form.content)
    )?;
    writeln!(
        out,
        "<p><input type=\"submit\" value=\"{}\">\n<a class=\"button\" href=\"/articles\">Cancel</a></p>\n</form>",
        escape(submit)
    )
}

fn write_show(out: &mut String, article: &ArticleDto, logged_in: bool) -> fmt::Result {
    writeln!(out, "<h1>{}</h1>", escape(&article.title))?;
    writeln!(
        out,
        "<p>by {} on {}</p>",
        escape(&article.author),
        article.created_at.format("%B %-d, %Y")
    )?;
    out.write_str("<div class=\"body\">\n")?;
    // Browsers submit textarea line breaks as CRLF.
    let body = article.body.replace("\r\n", "\n");
    for paragraph in body
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        writeln!(out, "<p>{}</p>", escape(paragraph))?;
    }
    out.write_str("</div>\n<p>\n")?;
    if logged_in {
        writeln!(
            out,
            "<a class=\"button\" href=\"/articles/{0}/edit\">Edit Article</a>\n<a class=\"button\" href=\"/articles/{0}/delete\">Delete Article</a>",
            article.id
        )?;
    }
    out.write_str("<a class=\"button\" href=\"/articles\">Home</a>\n</p>\n")
}

fn write_delete(out: &mut String, title: &str, article: &ArticleDto) -> fmt::Result {
    writeln!(out, "<h1>{}</h1>", escape(title))?;
    writeln!(
        out,
        "<p>Are you sure you want to delete the article \"{}\" by {}?</p>",
        escape(&article.title),
        escape(&article.author)
    )?;
    writeln!(
        out,
        "<form method=\"post\" action=\"/articles/{}/delete\">\n<p><input type=\"submit\" value=\"Delete\">\n<a class=\"button\" href=\"/articles/{}\">Cancel</a></p>\n</form>",
        article.id, article.id
    )
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
