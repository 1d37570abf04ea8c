use yew::prelude::*;

use crate::Page;

#[derive(Properties, PartialEq)]
pub struct SideMenuProps {
    pub open: bool,
    pub active_page: Page,
    pub on_navigate: Callback<Page>,
    pub on_close: Callback<()>,
}

#[function_component(SideMenu)]
pub fn side_menu(props: &SideMenuProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let class = classes!("side-menu", props.open.then_some("open"));

    html! {
        <>
            if props.open {
                <div class="side-menu-backdrop" onclick={on_backdrop_click}></div>
            }
            <nav {class}>
                <ul>
                    {for Page::NAVIGATION.iter().map(|page| {
                        let page = *page;
                        let on_navigate = props.on_navigate.clone();
                        let on_close = props.on_close.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_navigate.emit(page);
                            on_close.emit(());
                        });
                        let class = classes!("side-menu-item", (page == props.active_page).then_some("active"));

                        html! {
                            <li {class} {onclick}>
                                <i class={page.icon()}></i>
                                <span>{page.label()}</span>
                            </li>
                        }
                    })}
                </ul>
            </nav>
        </>
    }
}
