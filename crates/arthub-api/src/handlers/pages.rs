//! Server-rendered pages.
//!
//! Minimal HTML without a template engine: the pages are thin shells over
//! the same services the JSON API uses. Whether a visitor is logged in is
//! always re-derived from the verified session on each request, never
//! cached in page state.

use axum::extract::{Query, State};
use axum::response::Html;

use arthub_auth::jwt::Claims;
use arthub_database::repositories::ArtworkFilter;

use crate::error::ApiError;
use crate::extractors::{CurrentUser, OptionalUser};
use crate::handlers::artwork::ArtworkQuery;
use crate::state::AppState;

/// GET /
pub async fn home(OptionalUser(user): OptionalUser) -> Html<String> {
    let body = r#"
      <section class="hero">
        <h1>Dijital Sanat Galerisi</h1>
        <p>Modern sanatın dijital dünyasını keşfedin. Benzersiz eserler,
           yetenekli sanatçılar ve sınırsız yaratıcılık.</p>
        <p>
          <a class="button" href="/gallery">Galeriyi Keşfet</a>
          <a class="button" href="/auth/register">Üye Ol</a>
        </p>
      </section>"#;

    Html(layout("Dijital Sanat Galerisi", user.as_ref(), body))
}

/// GET /gallery
pub async fn gallery(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Query(query): Query<ArtworkQuery>,
) -> Result<Html<String>, ApiError> {
    let filter: ArtworkFilter = query.into();
    let artworks = state.artwork_service.list(&filter).await?;
    let categories = state.category_service.list().await?;

    let mut body = String::from("<h1>Sanat Galerisi</h1>");

    body.push_str("<form method=\"get\" action=\"/gallery\" class=\"filters\">");
    body.push_str(
        "<input type=\"text\" name=\"search\" placeholder=\"Eser veya sanatçı ara...\">",
    );
    body.push_str("<select name=\"category\"><option value=\"\">Tüm Kategoriler</option>");
    for category in &categories {
        body.push_str(&format!(
            "<option value=\"{0}\">{0} ({1})</option>",
            escape(&category.name),
            category.artwork_count
        ));
    }
    body.push_str("</select><button type=\"submit\">Ara</button></form>");

    if artworks.is_empty() {
        body.push_str("<p>Eser bulunamadı.</p>");
    } else {
        body.push_str("<ul class=\"artworks\">");
        for artwork in &artworks {
            body.push_str(&format!(
                "<li><img src=\"{}\" alt=\"{}\"><h2>{}</h2>\
                 <p>{} — {:.2} TL — {}</p></li>",
                escape(&artwork.image_url),
                escape(&artwork.title),
                escape(&artwork.title),
                escape(&artwork.artist_username),
                artwork.price,
                escape(&artwork.category_name),
            ));
        }
        body.push_str("</ul>");
    }

    Ok(Html(layout("Sanat Galerisi", user.as_ref(), &body)))
}

/// GET /auth/login
pub async fn login_page(OptionalUser(user): OptionalUser) -> Html<String> {
    let body = r#"
      <h1>Giriş Yap</h1>
      <p>Dijital Sanat Galerisine hoş geldiniz</p>
      <form method="post" action="/api/auth/login" class="auth-form">
        <label for="identifier">Email veya kullanıcı adı</label>
        <input id="identifier" name="identifier" type="text" required>
        <label for="password">Şifre</label>
        <input id="password" name="password" type="password" required>
        <button type="submit">Giriş Yap</button>
      </form>
      <p>Hesabınız yok mu? <a href="/auth/register">Üye Ol</a></p>"#;

    Html(layout("Giriş Yap", user.as_ref(), body))
}

/// GET /auth/register
pub async fn register_page(OptionalUser(user): OptionalUser) -> Html<String> {
    let body = r#"
      <h1>Üye Ol</h1>
      <form method="post" action="/api/auth/register" class="auth-form">
        <label for="username">Kullanıcı adı</label>
        <input id="username" name="username" type="text" required>
        <label for="email">Email</label>
        <input id="email" name="email" type="email" required>
        <label for="password">Şifre</label>
        <input id="password" name="password" type="password" required>
        <label for="role">Hesap türü</label>
        <select id="role" name="role">
          <option value="viewer">Sanatsever</option>
          <option value="artist">Sanatçı</option>
        </select>
        <button type="submit">Üye Ol</button>
      </form>
      <p>Zaten üye misiniz? <a href="/auth/login">Giriş Yap</a></p>"#;

    Html(layout("Üye Ol", user.as_ref(), body))
}

/// GET /profile
pub async fn profile(user: CurrentUser) -> Html<String> {
    let body = format!(
        "<h1>Profil</h1>\
         <p>Kullanıcı adı: {}</p>\
         <p>Email: {}</p>\
         <p>Rol: {}</p>\
         <form method=\"post\" action=\"/api/auth/logout\">\
           <button type=\"submit\">Çıkış Yap</button>\
         </form>",
        escape(&user.username),
        escape(&user.email),
        user.role,
    );

    Html(layout("Profil", Some(&user.0), &body))
}

/// GET /admin: only reachable with the `admin` role; the gate redirects
/// everyone else.
pub async fn admin_dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Html<String>, ApiError> {
    let categories = state.category_service.list().await?;

    let mut body = String::from("<h1>Yönetim Paneli</h1><h2>Kategoriler</h2><ul>");
    for category in &categories {
        body.push_str(&format!(
            "<li>{} — {} eser</li>",
            escape(&category.name),
            category.artwork_count
        ));
    }
    body.push_str("</ul>");

    Ok(Html(layout("Yönetim Paneli", Some(&user.0), &body)))
}

/// GET /artist: only reachable with the `artist` role.
pub async fn artist_dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Html<String>, ApiError> {
    let filter = ArtworkFilter {
        artist: Some(user.username.clone()),
        ..ArtworkFilter::default()
    };
    let artworks = state.artwork_service.list(&filter).await?;

    let mut body = String::from("<h1>Sanatçı Paneli</h1><h2>Eserlerim</h2>");
    if artworks.is_empty() {
        body.push_str("<p>Henüz eseriniz yok.</p>");
    } else {
        body.push_str("<ul>");
        for artwork in &artworks {
            body.push_str(&format!(
                "<li>{} — {:.2} TL — {}</li>",
                escape(&artwork.title),
                artwork.price,
                artwork.sale_status,
            ));
        }
        body.push_str("</ul>");
    }

    Ok(Html(layout("Sanatçı Paneli", Some(&user.0), &body)))
}

/// Shared page shell with a session-aware navigation bar.
fn layout(title: &str, user: Option<&Claims>, body: &str) -> String {
    let nav = match user {
        Some(claims) => format!(
            "<a href=\"/\">Ana Sayfa</a> <a href=\"/gallery\">Galeri</a> \
             <a href=\"/profile\">{}</a>",
            escape(&claims.username)
        ),
        None => "<a href=\"/\">Ana Sayfa</a> <a href=\"/gallery\">Galeri</a> \
                 <a href=\"/auth/login\">Giriş Yap</a> \
                 <a href=\"/auth/register\">Üye Ol</a>"
            .to_string(),
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"tr\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n<nav>{}</nav>\n<main>{}</main>\n\
         <footer>Dijital Sanat Galerisi</footer>\n</body>\n</html>",
        escape(title),
        nav,
        body
    )
}

/// Escape user-provided text for HTML interpolation.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("Tuval & Boya"), "Tuval &amp; Boya");
        assert_eq!(escape("sade"), "sade");
    }

    #[test]
    fn test_layout_reflects_session() {
        let anonymous = layout("Test", None, "<p>x</p>");
        assert!(anonymous.contains("Giriş Yap"));

        let claims = Claims {
            id: 1,
            email: "r@example.com".to_string(),
            role: arthub_entity::user::UserRole::Artist,
            username: "ressam".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        let signed_in = layout("Test", Some(&claims), "<p>x</p>");
        assert!(signed_in.contains("ressam"));
        assert!(!signed_in.contains("Üye Ol"));
    }
}
