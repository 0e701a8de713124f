//! Button styles

use leptos::*;

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Link,
    HeroPrimary,
    OutlineEarth,
    OrangeGradient,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Outline => "border border-primary bg-background hover:bg-primary hover:text-primary-foreground transition-all duration-300",
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground text-foreground",
            ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
            ButtonVariant::HeroPrimary => "relative overflow-hidden bg-gradient-fire text-primary-foreground px-10 py-5 rounded-3xl font-bold text-lg shadow-mega transition-all duration-500 hover:scale-[1.05] hover:shadow-fire active:scale-[0.95] border border-primary/20",
            ButtonVariant::OutlineEarth => "relative border-2 border-primary text-primary px-6 py-3 rounded-xl font-semibold bg-transparent transition-all duration-300 hover:bg-primary hover:text-primary-foreground hover:scale-[1.02] active:scale-[0.98]",
            ButtonVariant::OrangeGradient => "relative overflow-hidden px-8 py-4 rounded-2xl font-bold text-base text-white shadow-xl transition-all duration-300 hover:scale-[1.02] bg-gradient-to-r from-orange-500 via-orange-400 to-orange-500 animate-shimmer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
    Hero,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Sm => "h-9 rounded-md px-3",
            ButtonSize::Lg => "h-11 rounded-md px-8",
            ButtonSize::Icon => "h-10 w-10",
            ButtonSize::Hero => "h-auto py-5 px-10",
        }
    }
}

/// Full class list for a button or button-styled link
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    [BASE, variant.classes(), size.classes(), extra]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Anchor styled as a button
#[component]
pub fn LinkButton(
    href: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=button_class(variant, size, class)>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button_class() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), "");
        assert!(class.starts_with("inline-flex"));
        assert!(class.ends_with("h-10 px-4 py-2"));
        assert!(!class.contains("  "));
    }

    #[test]
    fn test_extra_classes_appended() {
        let class = button_class(ButtonVariant::HeroPrimary, ButtonSize::Hero, "group w-full");
        assert!(class.contains("bg-gradient-fire"));
        assert!(class.ends_with("py-5 px-10 group w-full"));
    }
}
