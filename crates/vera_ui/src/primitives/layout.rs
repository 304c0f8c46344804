use super::*;

#[component]
/// Flex stack flowing vertically or horizontally.
pub fn Stack(
    #[prop(default = StackDirection::Vertical)] direction: StackDirection,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    /// Wrap children onto new lines when the row overflows.
    #[prop(optional)]
    wrap: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-slot=ui_slot
            data-ui-direction=direction.token()
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-justify=justify.token()
            data-ui-wrap=bool_token(wrap)
        >
            {children()}
        </div>
    }
}
