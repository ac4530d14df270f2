use axum::response::Html;

#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "Static HTML banner", content_type = "text/html", body = String)
    )
)]
pub async fn home() -> Html<&'static str> {
    Html("<h1 align=center>Welcome to the BeChef! Recipe App</h1>")
}
