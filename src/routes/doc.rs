use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        favorites::AddFavoriteRequest,
        meals::{CreateMealRequest, MealPage, UpdateMealRequest},
        orders::{
            CreateOrderRequest, OrderLineInput, UpdateOrderStatusRequest,
            UpdatePaymentStatusRequest,
        },
        payments::{CreatePaymentIntentRequest, PaymentIntentResponse, RecordPaymentRequest},
        requests::{CreateRoleRequest, TransitionOutcome, TransitionRequest},
        reviews::{CreateReviewRequest, UpdateReviewRequest},
        users::{CreateUserRequest, UpdateProfileRequest, UpdateRoleRequest, UpdateStatusRequest},
    },
    models::{Favorite, Meal, Order, OrderLine, PaymentRecord, RequestStatus, Review, Role, RoleRequest, User},
    response::{ApiResponse, Meta},
    routes::{favorites, health, meals, orders, params, payments, requests, reviews, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        meals::list_meals,
        meals::get_meal,
        meals::create_meal,
        meals::update_meal,
        meals::delete_meal,
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_profile,
        users::update_role,
        users::update_status,
        reviews::list_reviews,
        reviews::create_review,
        reviews::update_review,
        reviews::delete_review,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order_status,
        orders::update_payment_status,
        requests::list_requests,
        requests::create_request,
        requests::get_request,
        requests::update_request,
        payments::create_payment_intent,
        payments::list_payment_history,
        payments::record_payment
    ),
    components(
        schemas(
            Meal,
            User,
            Review,
            Favorite,
            Order,
            OrderLine,
            RoleRequest,
            PaymentRecord,
            Role,
            RequestStatus,
            MealPage,
            CreateMealRequest,
            UpdateMealRequest,
            CreateUserRequest,
            UpdateProfileRequest,
            UpdateRoleRequest,
            UpdateStatusRequest,
            CreateReviewRequest,
            UpdateReviewRequest,
            AddFavoriteRequest,
            OrderLineInput,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            UpdatePaymentStatusRequest,
            CreateRoleRequest,
            TransitionRequest,
            TransitionOutcome,
            CreatePaymentIntentRequest,
            PaymentIntentResponse,
            RecordPaymentRequest,
            params::Pagination,
            params::SortOrder,
            Meta,
            ApiResponse<Meal>,
            ApiResponse<MealPage>,
            ApiResponse<Order>,
            ApiResponse<TransitionOutcome>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Meals", description = "Meal catalog endpoints"),
        (name = "Users", description = "User profile and role endpoints"),
        (name = "Reviews", description = "Meal review endpoints"),
        (name = "Favorites", description = "Favorite meal endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Requests", description = "Role request endpoints"),
        (name = "Payments", description = "Payment intent and history endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
