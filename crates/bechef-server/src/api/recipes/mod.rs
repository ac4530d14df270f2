pub mod create;
pub mod get;
pub mod list;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(create::add_recipe, list::list_recipes, get::get_recipe),
    components(schemas(create::AddRecipeForm, create::AddRecipeResponse))
)]
pub struct ApiDoc;
