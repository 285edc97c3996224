use proc_macro::TokenStream as TokenStream1;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, ToTokens};

/// This macro is added before a method of the `Round` struct in the impl block.
/// Use this macro to first check if the current round stage is exactly the stage
/// in the attribute.
///
/// For example, `#[allowed_stage(PlaceBet)]` will make a method first check
/// if the current stage is `PlaceBet`. If not, the method returns
/// `GameError::WrongStage` naming the method and both stages.
///
/// The annotated method must return `Result<_, GameError>`, and both `Stage`
/// and `GameError` must be in scope.
#[proc_macro_attribute]
pub fn allowed_stage(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = match syn::parse(item) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };
    let stage: syn::Ident = match syn::parse(attr) {
        Ok(ident) => ident,
        Err(err) => return err.to_compile_error().into(),
    };
    let stage = format_ident!("{}", stage);
    let operation = ast.sig.ident.to_string();

    let early_return: TokenStream2 = quote! {
        if self.stage != Stage::#stage {
            return Err(GameError::WrongStage {
                operation: #operation,
                expected: Stage::#stage,
                actual: self.stage,
            });
        }
    };
    let early_return: syn::Stmt = match syn::parse2(early_return) {
        Ok(stmt) => stmt,
        Err(err) => return err.to_compile_error().into(),
    };
    ast.block.stmts.insert(0, early_return);

    ast.into_token_stream().into()
}
